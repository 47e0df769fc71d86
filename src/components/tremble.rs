//! Horizontal tremble (sinusoidal shake) component.
//!
//! A [`Tremble`] attached to a character offsets its rendered X position by
//! `round(amplitude * sin(phase))` pixels. The phase advances by `speed`
//! radians every simulation tick while the amplitude is non-zero.
//!
//! # Lifecycle
//!
//! 1. [`crate::tremble::start_by_reference`] inserts the component (or re-arms
//!    the existing one)
//! 2. [`crate::systems::tremble::tremble_system`] advances it each tick
//! 3. The component is removed by [`crate::tremble::stop_by_reference`] or by
//!    the system itself once `phase` passes `stop_phase`
//!
//! Only [`TrembleRecord`] is persisted. The live phase is never saved, so a
//! tremble restored from a save file always restarts from phase zero.

use std::f64::consts::TAU;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Live tremble state of a single character.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Tremble {
    /// Angle accumulator in radians.
    pub phase: f64,
    /// Peak horizontal displacement in pixels. Zero means inactive.
    pub amplitude: f64,
    /// Phase increment per tick, in radians.
    pub speed: f64,
    /// Number of full cycles to run before detaching. `None` runs forever.
    pub cycle_limit: Option<f64>,
    /// Absolute phase past which the tremble detaches itself.
    pub stop_phase: Option<f64>,
    /// Current horizontal displacement in pixels.
    pub offset: i32,
}

impl Tremble {
    /// Create a fresh tremble at phase zero.
    pub fn new(amplitude: f64, speed: f64, cycle_limit: Option<f64>) -> Self {
        let mut tremble = Tremble {
            phase: 0.0,
            amplitude: 0.0,
            speed: 0.0,
            cycle_limit: None,
            stop_phase: None,
            offset: 0,
        };
        tremble.arm(amplitude, speed, cycle_limit);
        tremble
    }

    /// Re-arm with new parameters, keeping the current phase.
    ///
    /// The stop phase is measured from the phase at the moment of the call.
    pub fn arm(&mut self, amplitude: f64, speed: f64, cycle_limit: Option<f64>) {
        self.amplitude = amplitude;
        self.speed = speed;
        self.cycle_limit = cycle_limit;
        self.stop_phase = cycle_limit.map(|cycles| self.phase + cycles * TAU);
    }

    /// Whether the tick should advance this tremble at all.
    ///
    /// NaN counts as inactive, same as zero.
    pub fn is_active(&self) -> bool {
        self.amplitude != 0.0 && !self.amplitude.is_nan()
    }

    /// Advance one tick.
    ///
    /// Returns `true` when the stop phase has been passed and the tremble
    /// should be detached.
    pub fn advance(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.phase += self.speed;
        self.offset = offset_at(self.amplitude, self.phase);
        self.stop_phase.is_some_and(|stop| self.phase > stop)
    }

    /// Serializable subset used by save files.
    pub fn record(&self) -> TrembleRecord {
        TrembleRecord {
            amplitude: self.amplitude,
            speed: self.speed,
            cycle_limit: self.cycle_limit,
        }
    }
}

/// Horizontal displacement in whole pixels for the given amplitude and phase.
pub fn offset_at(amplitude: f64, phase: f64) -> i32 {
    (amplitude * phase.sin()).round() as i32
}

/// Persisted tremble parameters of a character.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrembleRecord {
    pub amplitude: f64,
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_limit: Option<f64>,
}

impl TrembleRecord {
    /// Records with a zero amplitude are not re-armed on load.
    pub fn should_rearm(&self) -> bool {
        self.amplitude != 0.0 && !self.amplitude.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_starts_at_phase_zero() {
        let t = Tremble::new(8.0, 0.8, None);
        assert!(approx_eq(t.phase, 0.0));
        assert_eq!(t.offset, 0);
        assert!(t.stop_phase.is_none());
    }

    #[test]
    fn test_new_with_cycle_limit_sets_stop_phase() {
        let t = Tremble::new(4.0, 0.5, Some(2.0));
        assert!(approx_eq(t.stop_phase.unwrap(), 2.0 * TAU));
    }

    #[test]
    fn test_arm_measures_stop_phase_from_current_phase() {
        let mut t = Tremble::new(4.0, 0.5, None);
        t.advance();
        t.advance();
        t.arm(4.0, 0.5, Some(1.0));
        assert!(approx_eq(t.stop_phase.unwrap(), 1.0 + TAU));
        assert!(t.stop_phase.unwrap() >= t.phase);
    }

    #[test]
    fn test_arm_without_limit_clears_stop_phase() {
        let mut t = Tremble::new(4.0, 0.5, Some(3.0));
        t.arm(4.0, 0.5, None);
        assert!(t.stop_phase.is_none());
        assert!(t.cycle_limit.is_none());
    }

    #[test]
    fn test_advance_matches_sine() {
        let mut t = Tremble::new(8.0, 0.8, None);
        assert!(!t.advance());
        assert_eq!(t.offset, 6);
        assert!(!t.advance());
        assert!(approx_eq(t.phase, 1.6));
        assert_eq!(t.offset, 8);
    }

    #[test]
    fn test_zero_amplitude_does_not_advance() {
        let mut t = Tremble::new(0.0, 0.8, Some(1.0));
        for _ in 0..100 {
            assert!(!t.advance());
        }
        assert!(approx_eq(t.phase, 0.0));
        assert_eq!(t.offset, 0);
    }

    #[test]
    fn test_nan_amplitude_is_inactive() {
        let t = Tremble::new(f64::NAN, 0.8, None);
        assert!(!t.is_active());
    }

    #[test]
    fn test_advance_reports_stop_after_limit() {
        let mut t = Tremble::new(3.0, 0.8, Some(1.0));
        let mut ticks = 0;
        while !t.advance() {
            ticks += 1;
            assert!(ticks < 100);
        }
        // ceil(TAU / 0.8) = 8
        assert_eq!(ticks + 1, 8);
    }

    #[test]
    fn test_negative_cycle_limit_stops_on_first_tick() {
        let mut t = Tremble::new(5.0, 0.5, Some(-1.0));
        assert!(t.stop_phase.unwrap() < t.phase);
        assert!(t.advance());
        assert_eq!(t.offset, (5.0 * 0.5f64.sin()).round() as i32);
    }

    #[test]
    fn test_negative_amplitude_mirrors_offset() {
        let mut t = Tremble::new(-8.0, 0.8, None);
        t.advance();
        assert_eq!(t.offset, -6);
    }

    #[test]
    fn test_record_keeps_parameters_only() {
        let mut t = Tremble::new(8.0, 0.8, Some(2.0));
        t.advance();
        let r = t.record();
        assert_eq!(
            r,
            TrembleRecord {
                amplitude: 8.0,
                speed: 0.8,
                cycle_limit: Some(2.0)
            }
        );
    }

    #[test]
    fn test_record_should_rearm() {
        let r = TrembleRecord {
            amplitude: 0.0,
            speed: 1.0,
            cycle_limit: None,
        };
        assert!(!r.should_rearm());
        let r = TrembleRecord { amplitude: 2.0, ..r };
        assert!(r.should_rearm());
    }

    #[test]
    fn test_record_json_omits_missing_cycle_limit() {
        let r = TrembleRecord {
            amplitude: 8.0,
            speed: 0.8,
            cycle_limit: None,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("cycle_limit"));
        let back: TrembleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
