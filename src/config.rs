//! Configuration for the plane, the controls and the terminal layout.

use crate::error::{Result, SlopeviewError};
use crate::plane::Point;

/// Upper bound on grid lines per axis (surface extent divided by scale).
pub const MAX_GRID_LINES: f64 = 2000.0;

/// Drawing surface and overlay settings.
#[derive(Debug, Clone)]
pub struct PlaneConfig {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Pixels per math unit.
    pub scale: f64,
    /// Maximum pointer distance (pixels) for the hover marker.
    pub hover_threshold: f64,
    /// Ticks and labels are drawn for -tick_range..=tick_range.
    pub tick_range: i32,
    /// The line is drawn between x = -line_extent and x = line_extent.
    pub line_extent: f64,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            scale: 40.0,
            hover_threshold: 20.0,
            tick_range: 10,
            line_extent: 15.0,
        }
    }
}

impl PlaneConfig {
    /// Check that the surface and scale can be drawn.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(SlopeviewError::invalid_view(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(SlopeviewError::invalid_view(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(SlopeviewError::invalid_view(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        let columns = self.width / self.scale;
        let rows = self.height / self.scale;
        if columns > MAX_GRID_LINES || rows > MAX_GRID_LINES {
            return Err(SlopeviewError::invalid_view(format!(
                "{}x{} px at scale {} needs more than {} grid lines per axis",
                self.width, self.height, self.scale, MAX_GRID_LINES
            )));
        }
        Ok(())
    }
}

/// One range control (slider).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeConfig {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Step granularity.
    pub step: f64,
}

impl RangeConfig {
    /// Check that the range is non-empty and the step usable.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(SlopeviewError::invalid_range(name, "bounds must be finite"));
        }
        if self.min >= self.max {
            return Err(SlopeviewError::invalid_range(
                name,
                format!("min {} must be below max {}", self.min, self.max),
            ));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SlopeviewError::invalid_range(
                name,
                format!("step must be positive, got {}", self.step),
            ));
        }
        Ok(())
    }
}

/// Control settings: slider ranges, initial values and the randomize range.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Initial slope.
    pub k: f64,
    /// Initial intercept.
    pub b: f64,
    /// Slope slider.
    pub k_range: RangeConfig,
    /// Intercept slider.
    pub b_range: RangeConfig,
    /// Inclusive integer range for the randomize action.
    pub random_range: (i32, i32),
    /// Slope used when the random draw lands on zero.
    pub random_k_fallback: f64,
    /// Seed for the randomize action; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        let slider = RangeConfig {
            min: -10.0,
            max: 10.0,
            step: 0.5,
        };
        Self {
            k: 1.0,
            b: 0.0,
            k_range: slider,
            b_range: slider,
            random_range: (-5, 5),
            random_k_fallback: 1.0,
            seed: None,
        }
    }
}

impl ControlConfig {
    /// Check initial values and ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.k.is_finite() {
            return Err(SlopeviewError::InvalidParameter {
                name: "k",
                value: self.k,
            });
        }
        if !self.b.is_finite() {
            return Err(SlopeviewError::InvalidParameter {
                name: "b",
                value: self.b,
            });
        }
        self.k_range.validate("k")?;
        self.b_range.validate("b")?;
        let (lo, hi) = self.random_range;
        if lo > hi {
            return Err(SlopeviewError::invalid_range(
                "random",
                format!("min {} must not exceed max {}", lo, hi),
            ));
        }
        if lo == 0 && hi == 0 {
            return Err(SlopeviewError::invalid_range(
                "random",
                "range must contain a non-zero slope",
            ));
        }
        Ok(())
    }
}

/// Terminal layout settings.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of the side panel in characters.
    pub panel_width: u16,
    /// Terminal cell height divided by width (for aspect ratio correction).
    pub cell_aspect: f64,
    /// Width of a slider track in characters.
    pub slider_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_width: 44,
            cell_aspect: 2.0, // 2:1 aspect ratio correction
            slider_width: 24,
        }
    }
}

/// Parse a surface pointer position written as `<x>,<y>`.
pub fn parse_pointer(input: &str) -> Result<Point> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| SlopeviewError::invalid_pointer(input))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SlopeviewError::invalid_pointer(input))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlaneConfig::default().validate().is_ok());
        assert!(ControlConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_scale() {
        let cfg = PlaneConfig {
            scale: 0.0,
            ..PlaneConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SlopeviewError::InvalidView(_))));
    }

    #[test]
    fn rejects_scales_that_flood_the_grid() {
        let tiny = PlaneConfig {
            scale: 0.001,
            ..PlaneConfig::default()
        };
        assert!(matches!(tiny.validate(), Err(SlopeviewError::InvalidView(_))));

        let huge = PlaneConfig {
            width: 2f64.powi(53),
            scale: 1.0,
            ..PlaneConfig::default()
        };
        assert!(huge.validate().is_err());

        // Exactly at the cap is still drawable.
        let edge = PlaneConfig {
            width: 1000.0,
            height: 1000.0,
            scale: 0.5,
            ..PlaneConfig::default()
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_parameters() {
        let cfg = ControlConfig {
            b: f64::INFINITY,
            ..ControlConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SlopeviewError::InvalidParameter { name: "b", .. })
        ));
    }

    #[test]
    fn rejects_bad_ranges() {
        let inverted = RangeConfig {
            min: 3.0,
            max: -3.0,
            step: 1.0,
        };
        assert!(inverted.validate("k").is_err());

        let zero_step = RangeConfig {
            min: -3.0,
            max: 3.0,
            step: 0.0,
        };
        assert!(zero_step.validate("k").is_err());

        let cfg = ControlConfig {
            random_range: (0, 0),
            ..ControlConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parses_pointer_positions() {
        assert_eq!(parse_pointer("340,100").unwrap(), Point::new(340.0, 100.0));
        assert_eq!(parse_pointer(" 12.5 , -3 ").unwrap(), Point::new(12.5, -3.0));
        assert!(parse_pointer("340").is_err());
        assert!(parse_pointer("a,1").is_err());
        assert!(parse_pointer("inf,1").is_err());
    }
}
