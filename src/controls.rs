//! Range controls for k and b, plus the reset and randomize actions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ControlConfig, RangeConfig};

/// A slider: a value kept inside a range and on its step grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeControl {
    range: RangeConfig,
    value: f64,
}

impl RangeControl {
    /// Create a control, clamping the initial value into range.
    pub fn new(range: RangeConfig, value: f64) -> Self {
        let mut control = Self { range, value: range.min };
        control.set(value);
        control
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set a value, clamped to the range. Off-grid values are kept as is.
    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(self.range.min, self.range.max);
    }

    /// Move one step up, snapping to the grid.
    pub fn step_up(&mut self) {
        self.value = self.snap(self.value + self.range.step);
    }

    /// Move one step down, snapping to the grid.
    pub fn step_down(&mut self) {
        self.value = self.snap(self.value - self.range.step);
    }

    /// Position of the value along the track, 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        (self.value - self.range.min) / (self.range.max - self.range.min)
    }

    fn snap(&self, value: f64) -> f64 {
        let RangeConfig { min, max, step } = self.range;
        let snapped = min + ((value - min) / step).round() * step;
        snapped.clamp(min, max)
    }
}

/// Draw random parameters from the integers of `lo..=hi`.
///
/// A zero slope is replaced by `k_fallback`; a zero intercept is kept.
pub fn random_parameters<R: Rng>(
    rng: &mut R,
    (lo, hi): (i32, i32),
    k_fallback: f64,
) -> (f64, f64) {
    let mut k = f64::from(rng.random_range(lo..=hi));
    if k == 0.0 {
        k = k_fallback;
    }
    let b = f64::from(rng.random_range(lo..=hi));
    (k, b)
}

/// Both sliders and the actions that move them together.
#[derive(Debug, Clone)]
pub struct Controls {
    /// Slope slider.
    pub k: RangeControl,
    /// Intercept slider.
    pub b: RangeControl,
    random_range: (i32, i32),
    random_k_fallback: f64,
    rng: StdRng,
}

impl Controls {
    /// Build controls from configuration.
    pub fn new(config: &ControlConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            k: RangeControl::new(config.k_range, config.k),
            b: RangeControl::new(config.b_range, config.b),
            random_range: config.random_range,
            random_k_fallback: config.random_k_fallback,
            rng,
        }
    }

    /// Current (k, b).
    pub fn values(&self) -> (f64, f64) {
        (self.k.value(), self.b.value())
    }

    /// Back to y = x.
    pub fn reset(&mut self) -> (f64, f64) {
        self.k.set(1.0);
        self.b.set(0.0);
        self.values()
    }

    /// Random integer slope and intercept.
    pub fn randomize(&mut self) -> (f64, f64) {
        let (k, b) = random_parameters(&mut self.rng, self.random_range, self.random_k_fallback);
        self.k.set(k);
        self.b.set(b);
        self.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Controls {
        Controls::new(&ControlConfig {
            seed: Some(7),
            ..ControlConfig::default()
        })
    }

    #[test]
    fn stepping_clamps_and_snaps() {
        let mut c = RangeControl::new(
            RangeConfig {
                min: -1.0,
                max: 1.0,
                step: 0.5,
            },
            0.3,
        );
        c.step_up();
        assert_eq!(c.value(), 1.0);
        c.step_up();
        assert_eq!(c.value(), 1.0);
        for _ in 0..10 {
            c.step_down();
        }
        assert_eq!(c.value(), -1.0);
        assert_eq!(c.fraction(), 0.0);
    }

    #[test]
    fn initial_value_is_clamped() {
        let c = RangeControl::new(RangeConfig { min: -10.0, max: 10.0, step: 0.5 }, 42.0);
        assert_eq!(c.value(), 10.0);
    }

    #[test]
    fn reset_restores_identity_line() {
        let mut c = seeded();
        c.k.set(-7.5);
        c.b.set(3.0);
        assert_eq!(c.reset(), (1.0, 0.0));
        c.randomize();
        assert_eq!(c.reset(), (1.0, 0.0));
    }

    #[test]
    fn randomize_never_yields_flat_line() {
        let mut c = seeded();
        let mut saw_zero_b = false;
        for _ in 0..1000 {
            let (k, b) = c.randomize();
            assert_ne!(k, 0.0);
            assert!((-5.0..=5.0).contains(&k), "k={k}");
            assert!((-5.0..=5.0).contains(&b), "b={b}");
            assert_eq!(k.fract(), 0.0);
            saw_zero_b |= b == 0.0;
        }
        assert!(saw_zero_b, "b = 0 is a valid random outcome");
    }

    #[test]
    fn zero_slope_draw_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let (k, b) = random_parameters(&mut rng, (0, 0), 1.0);
            assert_eq!((k, b), (1.0, 0.0));
        }
    }
}
