//! ## Partition of the reference setup (512 bins at 22050 / 512 ≈ 43hz per bin)
//! ```text
//! band | bins | range
//! -----+------+----------------
//!    0 |    2 | 0 - 86hz
//!    1 |    4 | 87 - 258hz
//!    2 |    8 | 259 - 602hz
//!    3 |   16 | 603 - 1290hz
//!    4 |   32 | 1291 - 2666hz
//!    5 |   64 | 2667 - 5418hz
//!    6 |  128 | 5419 - 10922hz
//!    7 |  258 | 10923 - 22050hz
//! ```

use std::ops::Range;

use crate::config::{BinDivisor, Channel, Config};
use crate::error::{Error, Result};
use crate::spectrum::Spectrum;

/// brings band values into a range that is usable for visuals
pub const BAND_SCALE: f32 = 10.0;

/// maps the bins of a spectrum onto a few exponentially growing bands
#[derive(Debug, Clone)]
pub struct BandMapper {
    ranges: Vec<Range<usize>>,
    sample_count: usize,
    channel: Channel,
    divisor: BinDivisor,
}

impl BandMapper {
    pub fn new(
        sample_count: usize,
        band_count: usize,
        channel: Channel,
        divisor: BinDivisor,
    ) -> Result<Self> {
        Ok(BandMapper {
            ranges: partition(sample_count, band_count)?,
            sample_count,
            channel,
            divisor,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.sample_count,
            config.band_count,
            config.channel,
            config.bin_divisor,
        )
    }

    /// bin range of every band, lowest band first
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn band_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// bin range of a single band
    pub fn range(&self, band: usize) -> Result<Range<usize>> {
        self.ranges
            .get(band)
            .cloned()
            .ok_or(Error::BandOutOfRange {
                index: band,
                band_count: self.ranges.len(),
            })
    }

    /// writes the raw value of every band into `bands`, which needs one slot per band
    ///
    /// every bin is weighted with its absolute index + 1, so higher bins inside a band count more
    pub fn map(&self, spectrum: &Spectrum, bands: &mut [f32]) -> Result<()> {
        if bands.len() != self.ranges.len() {
            return Err(Error::BandBufferLength {
                expected: self.ranges.len(),
                actual: bands.len(),
            });
        }
        spectrum.check(self.sample_count, self.channel)?;

        let mut consumed: usize = 0;
        for (value, range) in bands.iter_mut().zip(self.ranges.iter()) {
            let weighted: f32 = range
                .clone()
                .map(|bin| spectrum.bin(bin, self.channel) * (bin + 1) as f32)
                .sum();
            consumed += range.len();

            let divisor = match self.divisor {
                BinDivisor::Cumulative => consumed,
                BinDivisor::Band => range.len(),
            };
            *value = weighted / divisor as f32 * BAND_SCALE;
        }

        Ok(())
    }
}

/// splits `sample_count` bins into `band_count` contiguous ranges
///
/// band `i` gets `2^(i + 1)` bins, the last band gets everything that is left
/// which has to be at least its own `2^band_count`
pub fn partition(sample_count: usize, band_count: usize) -> Result<Vec<Range<usize>>> {
    if sample_count == 0 {
        return Err(Error::ZeroSampleCount);
    }
    if band_count == 0 {
        return Err(Error::ZeroBandCount);
    }
    if band_count + 1 >= usize::BITS as usize {
        return Err(Error::TooManyBands(band_count));
    }

    let required: usize = (1 << (band_count + 1)) - 2;
    if sample_count < required {
        return Err(Error::TooFewSamples {
            band_count,
            sample_count,
            required,
        });
    }

    let mut ranges: Vec<Range<usize>> = Vec::with_capacity(band_count);
    let mut start: usize = 0;
    for i in 0..band_count - 1 {
        let end = start + (1 << (i + 1));
        ranges.push(start..end);
        start = end;
    }
    ranges.push(start..sample_count);

    Ok(ranges)
}
