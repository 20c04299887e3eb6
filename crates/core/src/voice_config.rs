//! Voice configuration for speech synthesis

use serde::{Deserialize, Serialize};

/// Speaking rate and volume passed to every synthesis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Words per minute
    #[serde(default = "default_rate")]
    pub rate: u32,
    /// 0.0 (silent) to 1.0 (full)
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_rate() -> u32 {
    150
}

fn default_volume() -> f32 {
    1.0
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            volume: default_volume(),
        }
    }
}

impl VoiceConfig {
    pub fn new(rate: u32, volume: f32) -> Self {
        Self {
            rate,
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VoiceConfig::default();
        assert_eq!(config.rate, 150);
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn test_volume_clamped() {
        assert_eq!(VoiceConfig::new(120, 3.0).volume, 1.0);
        assert_eq!(VoiceConfig::new(120, -1.0).volume, 0.0);
    }
}
