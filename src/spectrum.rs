//! magnitude spectrum as it is handed over by the audio backend
//!
//! the FFT and windowing already happened on the backend side, this only carries the
//! non-negative magnitudes of one frame, one vector per channel

use crate::config::Channel;
use crate::error::{Error, Result};
use crate::utils::separate_channels;

/// magnitudes of a single frame, lowest frequency first
///
/// gets overwritten wholesale every tick, never appended to
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub left: Vec<f32>,

    /// `None` for mono sources
    pub right: Option<Vec<f32>>,
}

impl Spectrum {
    /// silent two channel spectrum
    pub fn stereo(sample_count: usize) -> Self {
        Spectrum {
            left: vec![0.0; sample_count],
            right: Some(vec![0.0; sample_count]),
        }
    }

    /// silent single channel spectrum
    pub fn mono(sample_count: usize) -> Self {
        Spectrum {
            left: vec![0.0; sample_count],
            right: None,
        }
    }

    pub fn from_channels(left: Vec<f32>, right: Option<Vec<f32>>) -> Self {
        Spectrum { left, right }
    }

    /// builds a spectrum from a buffer where the channels are interleaved (`L R L R ...`)
    ///
    /// only 1 and 2 channels are supported
    pub fn from_interleaved(data: &[f32], channel_count: usize) -> Result<Self> {
        if channel_count > 2 {
            return Err(Error::Interleaving {
                len: data.len(),
                channel_count,
            });
        }
        let mut channels = separate_channels(data, channel_count)?.into_iter();
        let left = channels.next().unwrap_or_default();
        let right = channels.next();

        Ok(Spectrum { left, right })
    }

    pub fn sample_count(&self) -> usize {
        self.left.len()
    }

    pub fn is_stereo(&self) -> bool {
        self.right.is_some()
    }

    /// makes sure the frame fits a pipeline with `sample_count` bins reading `channel`
    pub fn check(&self, sample_count: usize, channel: Channel) -> Result<()> {
        if self.left.len() != sample_count {
            return Err(Error::SpectrumLength {
                side: "left",
                expected: sample_count,
                actual: self.left.len(),
            });
        }
        match &self.right {
            Some(right) if right.len() != sample_count => Err(Error::SpectrumLength {
                side: "right",
                expected: sample_count,
                actual: right.len(),
            }),
            None if channel == Channel::Right => Err(Error::MissingChannel(channel)),
            _ => Ok(()),
        }
    }

    /// magnitude of a single bin as seen through `channel`
    ///
    /// `index` has to be in range, see `check()`
    pub(crate) fn bin(&self, index: usize, channel: Channel) -> f32 {
        let right = || self.right.as_ref().map_or(0.0, |right| right[index]);
        match channel {
            Channel::Combined => self.left[index] + right(),
            Channel::Left => self.left[index],
            Channel::Right => right(),
        }
    }
}

/// anything that can refresh a spectrum once per tick
///
/// implementors overwrite the magnitudes in place, the pipeline validates the result
pub trait SpectrumSource {
    fn fill(&mut self, spectrum: &mut Spectrum);
}

impl<F> SpectrumSource for F
where
    F: FnMut(&mut Spectrum),
{
    fn fill(&mut self, spectrum: &mut Spectrum) {
        self(spectrum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_stereo() {
        let spectrum = Spectrum::from_interleaved(&[0.1, 0.2, 0.3, 0.4], 2).unwrap();
        assert_eq!(spectrum.left, vec![0.1, 0.3]);
        assert_eq!(spectrum.right, Some(vec![0.2, 0.4]));
    }

    #[test]
    fn interleaved_mono() {
        let spectrum = Spectrum::from_interleaved(&[0.1, 0.2], 1).unwrap();
        assert_eq!(spectrum.left, vec![0.1, 0.2]);
        assert!(!spectrum.is_stereo());
    }

    #[test]
    fn interleaved_rejects_surround() {
        assert!(Spectrum::from_interleaved(&[0.0; 6], 3).is_err());
    }

    #[test]
    fn check_lengths() {
        let spectrum = Spectrum::stereo(4);
        assert_eq!(spectrum.check(4, Channel::Combined), Ok(()));
        assert_eq!(
            spectrum.check(8, Channel::Combined),
            Err(Error::SpectrumLength {
                side: "left",
                expected: 8,
                actual: 4
            })
        );

        let lopsided = Spectrum::from_channels(vec![0.0; 4], Some(vec![0.0; 3]));
        assert_eq!(
            lopsided.check(4, Channel::Left),
            Err(Error::SpectrumLength {
                side: "right",
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn mono_has_no_right_channel() {
        let spectrum = Spectrum::mono(4);
        assert_eq!(spectrum.check(4, Channel::Left), Ok(()));
        assert_eq!(spectrum.check(4, Channel::Combined), Ok(()));
        assert_eq!(
            spectrum.check(4, Channel::Right),
            Err(Error::MissingChannel(Channel::Right))
        );
    }

    #[test]
    fn bin_per_channel() {
        let spectrum = Spectrum::from_channels(vec![1.0, 2.0], Some(vec![0.5, 0.25]));
        assert_eq!(spectrum.bin(1, Channel::Combined), 2.25);
        assert_eq!(spectrum.bin(1, Channel::Left), 2.0);
        assert_eq!(spectrum.bin(1, Channel::Right), 0.25);

        let mono = Spectrum::from_channels(vec![1.0, 2.0], None);
        assert_eq!(mono.bin(0, Channel::Combined), 1.0);
    }

    #[test]
    fn closures_are_sources() {
        let mut tick = 0.0;
        let mut source = |spectrum: &mut Spectrum| {
            tick += 1.0;
            spectrum.left.iter_mut().for_each(|v| *v = tick);
        };
        let mut spectrum = Spectrum::mono(2);
        source.fill(&mut spectrum);
        source.fill(&mut spectrum);
        assert_eq!(spectrum.left, vec![2.0, 2.0]);
    }
}
