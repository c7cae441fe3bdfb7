/// running maximum that is used as the denominator for normalisation
///
/// never decreases, except that the seed itself may be above everything that is observed later
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighestTracker {
    seed: f32,
    highest: f32,
}

impl HighestTracker {
    pub fn new(seed: f32) -> Self {
        HighestTracker {
            seed,
            highest: seed,
        }
    }

    pub fn highest(&self) -> f32 {
        self.highest
    }

    /// takes `value` into account and returns it normalized against the updated highest
    pub fn observe(&mut self, value: f32) -> f32 {
        if value > self.highest {
            self.highest = value;
        }
        self.normalize(value)
    }

    /// `value / highest`, or 0.0 as long as nothing but silence was seen
    pub fn normalize(&self, value: f32) -> f32 {
        if self.highest == 0.0 {
            return 0.0;
        }
        value / self.highest
    }

    /// back to the seed
    pub fn reset(&mut self) {
        self.highest = self.seed;
    }
}

impl Default for HighestTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}
