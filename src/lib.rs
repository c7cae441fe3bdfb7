//! Bandpeer turns the magnitude spectrum of an audio source into a handful of
//! frequency bands that can directly drive visuals, like the intensity of a light or the
//! height of a bar.
//!
//! Every frame the spectrum gets split into exponentially growing bands, every band is
//! normalized against the highest value it has ever seen and gets a buffered version that
//! follows rising values instantly but falls back slowly.
//! All bands together make up an overall amplitude.
//!
//! The spectrum itself has to come from somewhere else, e.g. the FFT of an audio engine.
//!
//!# Code Example
//!```
//!use bandpeer::{BandPipeline, Config, Spectrum};
//!
//!fn main() -> Result<(), bandpeer::Error> {
//!    let mut pipeline = BandPipeline::new(Config::default())?;
//!
//!    // normally filled by the audio backend every frame
//!    let spectrum = Spectrum::stereo(512);
//!
//!    loop {
//!        pipeline.update(&spectrum)?;
//!
//!        // stored as &[f32], one value for every band
//!        let bands = pipeline.audio_band_buffers();
//!        let amplitude = pipeline.amplitude();
//!        /*
//!        do something with data ...
//!        */
//!        # let _ = (bands, amplitude);
//!        # break;
//!    }
//!    Ok(())
//!}
//!```

/// configuration of a `BandPipeline`
pub mod config;

pub mod error;

/// spectrum data and where it comes from
pub mod spectrum;

/// splitting, normalisation and buffering of single bands
pub mod bands;

/// overall loudness over all bands
pub mod amplitude;

/// the per-frame pipeline tying everything together
pub mod pipeline;

pub mod utils;

pub use amplitude::Amplitude;
pub use bands::BandView;
pub use config::{AggregationMode, AmplitudeBuffering, BinDivisor, Channel, Config, DecayConfig};
pub use error::{Error, Result};
pub use pipeline::BandPipeline;
pub use spectrum::{Spectrum, SpectrumSource};
