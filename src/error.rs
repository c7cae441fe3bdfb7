use crate::config::Channel;

/// everything that can go wrong while building or feeding a `BandPipeline`
///
/// all of these are caller mistakes, the pipeline itself has no partial-failure modes
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("sample count must be greater than 0")]
    ZeroSampleCount,

    #[error("band count must be greater than 0")]
    ZeroBandCount,

    #[error("band count {0} is too large to partition")]
    TooManyBands(usize),

    #[error("{band_count} bands need at least {required} samples, got {sample_count}")]
    TooFewSamples {
        band_count: usize,
        sample_count: usize,
        required: usize,
    },

    #[error("band index {index} is out of range 0..{band_count}")]
    BandOutOfRange { index: usize, band_count: usize },

    #[error("band buffer holds {actual} values, expected {expected}")]
    BandBufferLength { expected: usize, actual: usize },

    #[error("{side} channel holds {actual} samples, expected {expected}")]
    SpectrumLength {
        side: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("interleaved spectrum of length {len} can not be split into {channel_count} channels")]
    Interleaving { len: usize, channel_count: usize },

    #[error("channel mode {0:?} needs a right channel but the spectrum is mono")]
    MissingChannel(Channel),

    #[error("decay base rate must be positive and finite, got {0}")]
    InvalidDecayRate(f32),

    #[error("decay growth factor must be finite and at least 1.0, got {0}")]
    InvalidDecayGrowth(f32),

    #[error("highest seed must be finite and not negative, got {0}")]
    InvalidHighestSeed(f32),
}

pub type Result<T> = std::result::Result<T, Error>;
