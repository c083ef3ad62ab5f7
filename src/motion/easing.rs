use std::f64::consts::PI;

/// Easing curves, named after the power/sine/back families.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3Out,
    Power4Out,
    SineInOut,
    /// Overshoots past 1 before settling; the parameter is the overshoot strength.
    BackOut(f64),
}

impl Ease {
    /// Maps linear progress in `[0, 1]` to eased progress. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2In => t.powi(3),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 9] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::SineInOut,
        Ease::BackOut(1.7),
    ];

    #[test]
    fn every_curve_starts_at_zero_and_ends_at_one() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", ease);
        }
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_eq!(Ease::Power2In.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2In.apply(7.0), 1.0);
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(Ease::Power2In.apply(0.3) < 0.3);
        assert!(Ease::Power3Out.apply(0.3) > 0.3);
    }
}
