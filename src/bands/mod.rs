/// maps spectrum bins onto frequency bands
pub mod mapper;

/// running maximum for normalisation
pub mod highest;

/// attack / release envelope per band
pub mod decay;

/// published values of a single band for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandView {
    pub index: usize,

    /// weighted average of the band's bins
    pub raw: f32,

    /// decaying envelope of `raw`
    pub buffered: f32,

    /// `raw` relative to the highest value the band has seen, in `0..=1`
    pub normalized: f32,

    /// `buffered` relative to the same highest
    pub normalized_buffered: f32,

    pub highest: f32,
}
