use crate::config::DecayConfig;

/// what a single `DecayBuffer::update` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// value rose above the buffer, buffer jumped up and the rate was reset
    Attack,

    /// value is below the buffer, buffer fell by the rate and the rate grew
    Release,

    /// value equals the buffer
    Hold,
}

/// envelope of one band that follows rising values instantly
/// and falls back with an accelerating rate
///
/// ```text
///  |
///  |  |‾|
///  |  | |
///  |  | ‾‾-_
///  |  |     ‾-_
///  |  |        ‾\
///  |__|__________\___
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayBuffer {
    buffered: f32,
    rate: f32,
}

impl DecayBuffer {
    pub fn new(config: &DecayConfig) -> Self {
        DecayBuffer {
            buffered: 0.0,
            rate: config.base_rate,
        }
    }

    pub fn buffered(&self) -> f32 {
        self.buffered
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// advances the envelope by one tick
    ///
    /// attack and release are checked independently, so a value that is exactly
    /// the buffer leaves everything untouched
    pub fn update(&mut self, value: f32, config: &DecayConfig) -> Transition {
        let mut transition = Transition::Hold;

        if value > self.buffered {
            self.buffered = value;
            self.rate = config.base_rate;
            transition = Transition::Attack;
        }

        if value < self.buffered {
            // can overshoot below `value` for one tick, but never below silence
            self.buffered = (self.buffered - self.rate).max(0.0);
            self.rate *= config.growth;
            transition = Transition::Release;
        }

        transition
    }

    pub fn reset(&mut self, config: &DecayConfig) {
        *self = Self::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn attack_then_release() {
        let config = DecayConfig::default();
        let mut buffer = DecayBuffer::new(&config);

        assert_eq!(buffer.update(0.2, &config), Transition::Attack);
        assert_eq!(buffer.update(0.8, &config), Transition::Attack);
        assert_eq!(buffer.buffered(), 0.8);
        assert_eq!(buffer.rate(), 0.005);

        assert_eq!(buffer.update(0.3, &config), Transition::Release);
        assert_abs_diff_eq!(buffer.buffered(), 0.795, epsilon = 1e-6);
        assert_abs_diff_eq!(buffer.rate(), 0.006, epsilon = 1e-7);
    }

    #[test]
    fn equal_value_holds() {
        let config = DecayConfig::default();
        let mut buffer = DecayBuffer::new(&config);
        buffer.update(0.8, &config);
        buffer.update(0.3, &config);
        let before = buffer;

        let value = buffer.buffered();
        for _ in 0..5 {
            assert_eq!(buffer.update(value, &config), Transition::Hold);
        }
        assert_eq!(buffer, before);
    }

    #[test]
    fn release_accelerates() {
        let config = DecayConfig::default();
        let mut buffer = DecayBuffer::new(&config);
        buffer.update(1.0, &config);

        let mut last_rate = buffer.rate();
        let mut last_buffered = buffer.buffered();
        for _ in 0..10 {
            assert_eq!(buffer.update(0.0, &config), Transition::Release);
            assert!(buffer.rate() >= last_rate);
            assert!(buffer.buffered() <= last_buffered);
            last_rate = buffer.rate();
            last_buffered = buffer.buffered();
        }
    }

    #[test]
    fn attack_resets_rate() {
        let config = DecayConfig::default();
        let mut buffer = DecayBuffer::new(&config);
        buffer.update(1.0, &config);
        for _ in 0..4 {
            buffer.update(0.0, &config);
        }
        assert!(buffer.rate() > config.base_rate);

        assert_eq!(buffer.update(2.0, &config), Transition::Attack);
        assert_eq!(buffer.rate(), config.base_rate);
        assert_eq!(buffer.buffered(), 2.0);
    }

    #[test]
    fn never_below_zero() {
        let config = DecayConfig {
            base_rate: 0.5,
            growth: 2.0,
        };
        let mut buffer = DecayBuffer::new(&config);
        buffer.update(0.6, &config);
        for _ in 0..5 {
            buffer.update(0.0, &config);
            assert!(buffer.buffered() >= 0.0);
        }
        assert_eq!(buffer.buffered(), 0.0);
    }
}
