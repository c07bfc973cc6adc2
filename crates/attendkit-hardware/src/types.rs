//! Feedback-panel types shared across device implementations.

use attendkit_core::constants::{
    BEEP_ERROR_COUNT, BEEP_ERROR_OFF_MS, BEEP_ERROR_ON_MS, BEEP_SUCCESS_COUNT,
    BEEP_SUCCESS_OFF_MS, BEEP_SUCCESS_ON_MS, BEEP_WARNING_COUNT, BEEP_WARNING_ON_MS,
};

/// Status LED color on the reader panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedColor {
    /// Success or grant indication.
    Green,

    /// Failure or denial indication.
    Red,

    /// Neutral; both LEDs dark.
    #[default]
    Off,
}

/// One buzzer pulse: drive for `on_ms`, then stay silent for `off_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeepPulse {
    pub on_ms: u64,
    pub off_ms: u64,
}

/// The three buzzer patterns the reader uses.
///
/// A driver plays a pattern by iterating its pulses in order; the panel is
/// busy for the whole sequence (feedback is not cancelled mid-pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeepPattern {
    /// Three short pulses (100 ms on / 50 ms off).
    Success,

    /// Two long pulses (500 ms on / 200 ms off).
    Error,

    /// One medium pulse (300 ms on).
    Warning,
}

impl BeepPattern {
    /// Expand the pattern into its pulse sequence.
    pub fn pulses(&self) -> Vec<BeepPulse> {
        match self {
            BeepPattern::Success => vec![
                BeepPulse {
                    on_ms: BEEP_SUCCESS_ON_MS,
                    off_ms: BEEP_SUCCESS_OFF_MS,
                };
                BEEP_SUCCESS_COUNT
            ],
            BeepPattern::Error => vec![
                BeepPulse {
                    on_ms: BEEP_ERROR_ON_MS,
                    off_ms: BEEP_ERROR_OFF_MS,
                };
                BEEP_ERROR_COUNT
            ],
            BeepPattern::Warning => vec![
                BeepPulse {
                    on_ms: BEEP_WARNING_ON_MS,
                    off_ms: 0,
                };
                BEEP_WARNING_COUNT
            ],
        }
    }

    /// Total time a driver spends playing this pattern.
    pub fn total_duration_ms(&self) -> u64 {
        self.pulses().iter().map(|p| p.on_ms + p.off_ms).sum()
    }
}

/// A complete user-facing feedback unit: two display lines, an LED color,
/// and a buzzer pattern, presented together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Top display line (16 columns on the deployed panel).
    pub line1: String,

    /// Bottom display line.
    pub line2: String,

    pub led: LedColor,

    pub beep: BeepPattern,
}

impl Notification {
    pub fn new(
        line1: impl Into<String>,
        line2: impl Into<String>,
        led: LedColor,
        beep: BeepPattern,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
            led,
            beep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_pattern_pulses() {
        let pulses = BeepPattern::Success.pulses();
        assert_eq!(pulses.len(), 3);
        assert!(pulses.iter().all(|p| p.on_ms == 100 && p.off_ms == 50));
        assert_eq!(BeepPattern::Success.total_duration_ms(), 450);
    }

    #[test]
    fn test_error_pattern_pulses() {
        let pulses = BeepPattern::Error.pulses();
        assert_eq!(pulses.len(), 2);
        assert!(pulses.iter().all(|p| p.on_ms == 500 && p.off_ms == 200));
        assert_eq!(BeepPattern::Error.total_duration_ms(), 1400);
    }

    #[test]
    fn test_warning_pattern_pulses() {
        let pulses = BeepPattern::Warning.pulses();
        assert_eq!(pulses.len(), 1);
        assert_eq!(pulses[0].on_ms, 300);
        assert_eq!(BeepPattern::Warning.total_duration_ms(), 300);
    }

    #[test]
    fn test_led_color_default_off() {
        assert_eq!(LedColor::default(), LedColor::Off);
    }
}
