/// Tunables for the puzzle engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// How long one quarter turn animates, in milliseconds
    pub turn_duration_ms: f32,
    /// Number of random moves queued by a scramble
    pub scramble_length: usize,
    pub min_turn_duration_ms: f32,
    pub max_turn_duration_ms: f32,
}

impl EngineConfig {
    /// Set turn duration (builder pattern), clamped to the allowed range
    pub fn with_turn_duration_ms(mut self, ms: f32) -> Self {
        self.turn_duration_ms = self.clamp_duration(ms);
        self
    }

    pub fn with_scramble_length(mut self, moves: usize) -> Self {
        self.scramble_length = moves;
        self
    }

    pub fn clamp_duration(&self, ms: f32) -> f32 {
        ms.clamp(self.min_turn_duration_ms, self.max_turn_duration_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_duration_ms: 500.0,
            scramble_length: 20,
            min_turn_duration_ms: 50.0,
            max_turn_duration_ms: 3000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.turn_duration_ms, 500.0);
        assert_eq!(config.scramble_length, 20);
    }

    #[test]
    fn test_duration_is_clamped() {
        let config = EngineConfig::default().with_turn_duration_ms(1.0);
        assert_eq!(config.turn_duration_ms, 50.0);
        let config = config.with_turn_duration_ms(1e6);
        assert_eq!(config.turn_duration_ms, 3000.0);
    }
}
