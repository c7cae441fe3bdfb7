#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// which spectrum channel(s) feed the bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Channel {
    /// left and right magnitudes are summed per bin
    ///
    /// a mono spectrum contributes its only channel
    Combined,
    Left,
    Right,
}

/// what the weighted sum of a band gets divided by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinDivisor {
    /// number of bins consumed so far across all bands of this tick
    ///
    /// ```text
    /// band 0: bins 0..2    / 2
    /// band 1: bins 2..6    / 6
    /// band 2: bins 6..14   / 14
    /// ...
    /// ```
    Cumulative,

    /// number of bins of the band itself, gives noticeably louder high bands
    Band,
}

/// what gets summed into the aggregate amplitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AggregationMode {
    /// sum of the normalized band values (0..=1 each)
    Normalized,

    /// sum of the unnormalized band values
    Raw,
}

/// how `amplitude_buffer` is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmplitudeBuffering {
    /// sum of the band buffers, divided by the amplitude highest
    BandSum,

    /// the aggregate amplitude gets its own decaying envelope
    Envelope,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecayConfig {
    /// amount subtracted on the first release tick, restored on every attack
    pub base_rate: f32,

    /// the rate gets multiplied by this after every release tick
    pub growth: f32,
}
impl Default for DecayConfig {
    fn default() -> Self {
        DecayConfig {
            base_rate: 0.005,
            growth: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// number of magnitudes per channel delivered every tick
    pub sample_count: usize,

    /// number of bands, band `i` covers `2^(i + 1)` bins and the last one takes the rest
    pub band_count: usize,

    pub channel: Channel,

    /// initial value of every band highest
    ///
    /// a value around the average band level keeps the first seconds from
    /// jumping to 1.0 on every quiet bin
    pub highest_seed: f32,

    pub decay: DecayConfig,

    pub bin_divisor: BinDivisor,

    pub aggregation: AggregationMode,

    pub amplitude_buffering: AmplitudeBuffering,
}
impl Default for Config {
    fn default() -> Self {
        Config {
            sample_count: 512,
            band_count: 8,
            channel: Channel::Combined,
            highest_seed: 0.0,
            decay: DecayConfig::default(),
            bin_divisor: BinDivisor::Cumulative,
            aggregation: AggregationMode::Normalized,
            amplitude_buffering: AmplitudeBuffering::BandSum,
        }
    }
}

impl Config {
    /// checks everything that does not depend on the band partition
    ///
    /// the partition itself is checked by `BandMapper::new`
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(Error::ZeroSampleCount);
        }
        if self.band_count == 0 {
            return Err(Error::ZeroBandCount);
        }
        if !self.highest_seed.is_finite() || self.highest_seed < 0.0 {
            return Err(Error::InvalidHighestSeed(self.highest_seed));
        }
        self.decay.validate()
    }
}

impl DecayConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.base_rate.is_finite() || self.base_rate <= 0.0 {
            return Err(Error::InvalidDecayRate(self.base_rate));
        }
        if !self.growth.is_finite() || self.growth < 1.0 {
            return Err(Error::InvalidDecayGrowth(self.growth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_counts() {
        let config = Config {
            sample_count: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::ZeroSampleCount));

        let config = Config {
            band_count: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::ZeroBandCount));
    }

    #[test]
    fn rejects_bad_seed_and_decay() {
        let config = Config {
            highest_seed: -1.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidHighestSeed(-1.0)));

        let config = Config {
            decay: DecayConfig {
                base_rate: 0.0,
                growth: 1.2,
            },
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidDecayRate(0.0)));

        let config = Config {
            decay: DecayConfig {
                base_rate: 0.005,
                growth: 0.5,
            },
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidDecayGrowth(0.5)));
    }
}
