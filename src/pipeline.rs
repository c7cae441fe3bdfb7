//! # How it works
//! ```text
//!     ┌──────────────────────────┐
//!     │  audio backend, fills a  │
//!     │  `Spectrum` every frame  │
//!     └──────────────────────────┘
//!           |
//!           | tick() / update()
//!           ↓
//! ┌───────────────────┐        ┌──────────────┐
//! │   BandPipeline    │ -----> |  BandMapper  |
//! |                   │ <----- └──────────────┘
//! |                   │ -----> ┌──────────────┐
//! |                   │ <----- | DecayBuffer  |  per band
//! |                   │ -----> ┌──────────────┐
//! |                   │ <----- |HighestTracker|  per band
//! |                   │ -----> ┌──────────────┐
//! |                   │ <----- |  Amplitude   |
//! └───────────────────┘        └──────────────┘
//!        |
//!        | audio_bands(), audio_band_buffers(), amplitude() ...
//!        ↓
//!     ┌─────────────────────────┐
//!     │ visuals, read only, once│
//!     │ per frame after the tick│
//!     └─────────────────────────┘
//! ```
//!
//! ## Example
//! ```
//! use bandpeer::{BandPipeline, Config, Spectrum};
//!
//! let mut pipeline = BandPipeline::new(Config::default()).unwrap();
//!
//! let mut source = |spectrum: &mut Spectrum| {
//!     for (i, value) in spectrum.left.iter_mut().enumerate() {
//!         *value = 1.0 / (i + 1) as f32;
//!     }
//!     if let Some(right) = spectrum.right.as_mut() {
//!         right.copy_from_slice(&spectrum.left);
//!     }
//! };
//!
//! for _ in 0..3 {
//!     pipeline.tick(&mut source).unwrap();
//!     let bass = pipeline.band(0).unwrap();
//!     assert!(bass.normalized <= 1.0);
//! }
//! ```

use crate::amplitude::{Amplitude, AmplitudeAggregator, BandFrame};
use crate::bands::decay::DecayBuffer;
use crate::bands::highest::HighestTracker;
use crate::bands::mapper::BandMapper;
use crate::bands::BandView;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::spectrum::{Spectrum, SpectrumSource};

/// state a single band carries from tick to tick
#[derive(Debug, Clone, Copy)]
struct BandState {
    highest: HighestTracker,
    decay: DecayBuffer,
}

/// owns everything one audio source needs and publishes the results of the last tick
///
/// instances share nothing, several sources just use several pipelines
#[derive(Debug, Clone)]
pub struct BandPipeline {
    config: Config,
    mapper: BandMapper,
    spectrum: Spectrum,
    /// frame handed to sources, only published once it passed `check()`
    scratch: Spectrum,
    states: Vec<BandState>,

    frequency_bands: Vec<f32>,
    frequency_band_buffers: Vec<f32>,
    audio_bands: Vec<f32>,
    audio_band_buffers: Vec<f32>,

    aggregator: AmplitudeAggregator,
    ticks: u64,
}

impl BandPipeline {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let mapper = BandMapper::from_config(&config)?;
        log::debug!(
            "band pipeline with {} bins in {} bands: {:?}",
            config.sample_count,
            config.band_count,
            mapper.ranges()
        );

        let state = BandState {
            highest: HighestTracker::new(config.highest_seed),
            decay: DecayBuffer::new(&config.decay),
        };
        let bands = config.band_count;

        Ok(Self {
            spectrum: Spectrum::stereo(config.sample_count),
            scratch: Spectrum::stereo(config.sample_count),
            states: vec![state; bands],
            frequency_bands: vec![0.0; bands],
            frequency_band_buffers: vec![0.0; bands],
            audio_bands: vec![0.0; bands],
            audio_band_buffers: vec![0.0; bands],
            aggregator: AmplitudeAggregator::new(&config),
            ticks: 0,
            mapper,
            config,
        })
    }

    /// lets `source` refresh the spectrum, then processes it
    ///
    /// the source sees a copy of the last accepted frame, a frame that does not pass
    /// `Spectrum::check()` is dropped and the next tick starts from the last good one again
    pub fn tick<S: SpectrumSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        self.scratch.clone_from(&self.spectrum);
        source.fill(&mut self.scratch);
        if let Err(e) = self.scratch.check(self.config.sample_count, self.config.channel) {
            log::warn!("rejected spectrum: {}", e);
            return Err(e);
        }
        std::mem::swap(&mut self.spectrum, &mut self.scratch);
        self.process()
    }

    /// processes a spectrum that was acquired by the caller
    pub fn update(&mut self, spectrum: &Spectrum) -> Result<()> {
        if let Err(e) = spectrum.check(self.config.sample_count, self.config.channel) {
            log::warn!("rejected spectrum: {}", e);
            return Err(e);
        }
        self.spectrum.clone_from(spectrum);
        self.process()
    }

    /// runs a full tick on `self.spectrum`
    ///
    /// on error none of the published values are touched
    fn process(&mut self) -> Result<()> {
        if let Err(e) = self.mapper.map(&self.spectrum, &mut self.frequency_bands) {
            log::warn!("rejected spectrum: {}", e);
            return Err(e);
        }

        for (i, state) in self.states.iter_mut().enumerate() {
            let raw = self.frequency_bands[i];

            state.decay.update(raw, &self.config.decay);
            let buffered = state.decay.buffered();
            self.frequency_band_buffers[i] = buffered;

            self.audio_bands[i] = state.highest.observe(raw);
            self.audio_band_buffers[i] = state.highest.normalize(buffered);
        }

        let amplitude = self.aggregator.update(&BandFrame {
            raw: &self.frequency_bands,
            raw_buffers: &self.frequency_band_buffers,
            normalized: &self.audio_bands,
            normalized_buffers: &self.audio_band_buffers,
        });

        self.ticks += 1;
        log::trace!(
            "tick {}: bands {:?}, amplitude {:?}",
            self.ticks,
            self.audio_bands,
            amplitude
        );

        Ok(())
    }

    /// drops everything that was learned so far, the configuration stays
    pub fn reset(&mut self) {
        for state in self.states.iter_mut() {
            state.highest.reset();
            state.decay.reset(&self.config.decay);
        }
        self.frequency_bands
            .iter_mut()
            .chain(self.frequency_band_buffers.iter_mut())
            .chain(self.audio_bands.iter_mut())
            .chain(self.audio_band_buffers.iter_mut())
            .for_each(|v| *v = 0.0);
        self.aggregator.reset();
        self.ticks = 0;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mapper(&self) -> &BandMapper {
        &self.mapper
    }

    /// number of successfully processed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// spectrum of the last tick
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// unnormalized band values
    pub fn frequency_bands(&self) -> &[f32] {
        &self.frequency_bands
    }

    /// decaying envelopes of `frequency_bands()`
    pub fn frequency_band_buffers(&self) -> &[f32] {
        &self.frequency_band_buffers
    }

    /// band values relative to their highest, in `0..=1`
    pub fn audio_bands(&self) -> &[f32] {
        &self.audio_bands
    }

    /// band envelopes relative to the band highest, in `0..=1`
    pub fn audio_band_buffers(&self) -> &[f32] {
        &self.audio_band_buffers
    }

    /// sum of all bands relative to the highest sum so far, in `0..=1`
    pub fn amplitude(&self) -> f32 {
        self.aggregator.amplitude().value
    }

    /// buffered counterpart of `amplitude()`, see `AmplitudeBuffering`
    pub fn amplitude_buffer(&self) -> f32 {
        self.aggregator.amplitude().buffer
    }

    /// `amplitude()` and `amplitude_buffer()` together
    pub fn aggregate(&self) -> Amplitude {
        self.aggregator.amplitude()
    }

    /// everything that was published for a single band
    pub fn band(&self, index: usize) -> Result<BandView> {
        let state = self.states.get(index).ok_or(Error::BandOutOfRange {
            index,
            band_count: self.states.len(),
        })?;

        Ok(BandView {
            index,
            raw: self.frequency_bands[index],
            buffered: self.frequency_band_buffers[index],
            normalized: self.audio_bands[index],
            normalized_buffered: self.audio_band_buffers[index],
            highest: state.highest.highest(),
        })
    }

    /// decay rate a band will use on its next release tick
    pub fn decay_rate(&self, index: usize) -> Result<f32> {
        self.states
            .get(index)
            .map(|state| state.decay.rate())
            .ok_or(Error::BandOutOfRange {
                index,
                band_count: self.states.len(),
            })
    }
}
