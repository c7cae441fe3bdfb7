//! overall loudness of a tick, derived from all bands together

use crate::bands::decay::DecayBuffer;
use crate::bands::highest::HighestTracker;
use crate::config::{AggregationMode, AmplitudeBuffering, Config, DecayConfig};

/// aggregate amplitude of one tick, both values are divided by the highest aggregate seen so far
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Amplitude {
    /// in `0..=1`
    pub value: f32,

    /// with `AmplitudeBuffering::BandSum` the summed band buffers are divided by the
    /// highest sum of instantaneous values, so this can go above 1.0 while bands decay
    /// at different times
    pub buffer: f32,
}

/// band values of one tick, as the aggregator reads them
#[derive(Debug, Clone, Copy)]
pub struct BandFrame<'a> {
    pub raw: &'a [f32],
    pub raw_buffers: &'a [f32],
    pub normalized: &'a [f32],
    pub normalized_buffers: &'a [f32],
}

#[derive(Debug, Clone)]
pub struct AmplitudeAggregator {
    mode: AggregationMode,
    buffering: AmplitudeBuffering,
    decay: DecayConfig,
    highest: HighestTracker,
    envelope: DecayBuffer,
    current: Amplitude,
}

impl AmplitudeAggregator {
    pub fn new(config: &Config) -> Self {
        AmplitudeAggregator {
            mode: config.aggregation,
            buffering: config.amplitude_buffering,
            decay: config.decay,
            highest: HighestTracker::default(),
            envelope: DecayBuffer::new(&config.decay),
            current: Amplitude::default(),
        }
    }

    pub fn update(&mut self, frame: &BandFrame) -> Amplitude {
        let (values, buffers) = match self.mode {
            AggregationMode::Normalized => (frame.normalized, frame.normalized_buffers),
            AggregationMode::Raw => (frame.raw, frame.raw_buffers),
        };

        let sum: f32 = values.iter().sum();
        let value = self.highest.observe(sum);

        let buffer = match self.buffering {
            AmplitudeBuffering::BandSum => self.highest.normalize(buffers.iter().sum()),
            AmplitudeBuffering::Envelope => {
                self.envelope.update(value, &self.decay);
                self.envelope.buffered()
            }
        };

        self.current = Amplitude { value, buffer };
        self.current
    }

    pub fn amplitude(&self) -> Amplitude {
        self.current
    }

    pub fn highest(&self) -> f32 {
        self.highest.highest()
    }

    pub fn reset(&mut self) {
        self.highest.reset();
        self.envelope.reset(&self.decay);
        self.current = Amplitude::default();
    }
}
