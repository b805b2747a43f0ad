//! Explanatory text for the current line.

use std::fmt;
use std::str::FromStr;

use crate::util::formatters::format_value;

/// Language of the explanation and hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English.
    #[default]
    English,
    /// Simplified Chinese.
    Chinese,
}

impl Language {
    /// Get the next language in the cycle.
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }

    /// Get the language name.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Placeholder shown while no point on the line is under the pointer.
    pub fn pointer_hint(self) -> &'static str {
        match self {
            Language::English => "Move the pointer onto the line to see its coordinates",
            Language::Chinese => "将鼠标移到直线上查看坐标",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "zh" | "cn" | "chinese" => Ok(Language::Chinese),
            other => Err(format!("unknown language '{}' (expected en or zh)", other)),
        }
    }
}

/// How k and b shape the line, one remark per aspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// Direction of the line; absent for k = 0.
    pub slope: Option<String>,
    /// Steep or gentle remark; absent for 2 <= |k| <= 3.
    pub steepness: Option<String>,
    /// Where the line meets the y axis.
    pub intercept: String,
    /// The equation with k and b substituted.
    pub equation: String,
    /// Change of y per unit step in x.
    pub unit_step: String,
}

impl Explanation {
    /// Text grouped into paragraphs: slope, intercept, equation.
    pub fn paragraphs(&self) -> Vec<String> {
        let slope: Vec<&str> = self
            .slope
            .iter()
            .chain(self.steepness.iter())
            .map(String::as_str)
            .collect();

        let mut paragraphs = Vec::with_capacity(3);
        if !slope.is_empty() {
            paragraphs.push(slope.join(" "));
        }
        paragraphs.push(self.intercept.clone());
        paragraphs.push(format!("{}\n{}", self.equation, self.unit_step));
        paragraphs
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paragraphs().join("\n\n"))
    }
}

/// Describe the effect of k and b on the line.
pub fn explain(k: f64, b: f64, language: Language) -> Explanation {
    let k_text = format_value(k);
    let b_text = format_value(b);
    let abs_text = format_value(k.abs());

    match language {
        Language::English => Explanation {
            slope: if k > 0.0 {
                Some(format!(
                    "Slope k = {} > 0: the line rises from left to right, so y increases as x increases.",
                    k_text
                ))
            } else if k < 0.0 {
                Some(format!(
                    "Slope k = {} < 0: the line falls from left to right, so y decreases as x increases.",
                    k_text
                ))
            } else {
                None
            },
            steepness: if k.abs() > 3.0 {
                Some(format!("|k| = {} is large, so the line is steep.", abs_text))
            } else if k.abs() < 2.0 {
                Some(format!("|k| = {} is small, so the line is gentle.", abs_text))
            } else {
                None
            },
            intercept: if b > 0.0 {
                format!(
                    "Intercept b = {} > 0: the line crosses the positive y axis at (0, {}).",
                    b_text, b_text
                )
            } else if b < 0.0 {
                format!(
                    "Intercept b = {} < 0: the line crosses the negative y axis at (0, {}).",
                    b_text, b_text
                )
            } else {
                "Intercept b = 0: the line passes through the origin (0, 0).".to_string()
            },
            equation: format!("Equation: y = {}x + {}", k_text, b_text),
            unit_step: format!("Each time x increases by 1, y changes by {}.", k_text),
        },
        Language::Chinese => Explanation {
            slope: if k > 0.0 {
                Some(format!(
                    "当前斜率 k = {} > 0，直线向右上方倾斜，函数值随 x 增大而增大。",
                    k_text
                ))
            } else if k < 0.0 {
                Some(format!(
                    "当前斜率 k = {} < 0，直线向右下方倾斜，函数值随 x 增大而减小。",
                    k_text
                ))
            } else {
                None
            },
            steepness: if k.abs() > 3.0 {
                Some(format!("斜率的绝对值 |k| = {} 较大，直线比较陡峭。", abs_text))
            } else if k.abs() < 2.0 {
                Some(format!("斜率的绝对值 |k| = {} 较小，直线比较平缓。", abs_text))
            } else {
                None
            },
            intercept: if b > 0.0 {
                format!(
                    "当前截距 b = {} > 0，直线与 y 轴交于正半轴上的点 (0, {})。",
                    b_text, b_text
                )
            } else if b < 0.0 {
                format!(
                    "当前截距 b = {} < 0，直线与 y 轴交于负半轴上的点 (0, {})。",
                    b_text, b_text
                )
            } else {
                "当前截距 b = 0，直线经过原点 (0, 0)。".to_string()
            },
            equation: format!("函数表达式：y = {}x + {}", k_text, b_text),
            unit_step: format!("当 x 每增加 1 个单位时，y 会增加 {} 个单位。", k_text),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_gentle_line() {
        let e = explain(1.0, 0.0, Language::English);
        assert!(e.slope.as_deref().unwrap().contains("rises"));
        assert!(e.steepness.as_deref().unwrap().contains("gentle"));
        assert!(e.intercept.contains("origin"));
        assert_eq!(e.equation, "Equation: y = 1x + 0");
        assert!(e.unit_step.ends_with("changes by 1."));
    }

    #[test]
    fn falling_steep_line() {
        let e = explain(-4.5, 2.0, Language::English);
        assert!(e.slope.as_deref().unwrap().contains("falls"));
        assert!(e.steepness.as_deref().unwrap().contains("|k| = 4.5"));
        assert!(e.intercept.contains("positive y axis at (0, 2)"));
    }

    #[test]
    fn middle_band_has_no_steepness_remark() {
        for k in [2.0, 2.5, 3.0, -3.0] {
            assert_eq!(explain(k, 0.0, Language::English).steepness, None, "k={k}");
        }
    }

    #[test]
    fn flat_line_has_no_direction() {
        let e = explain(0.0, -1.5, Language::English);
        assert_eq!(e.slope, None);
        assert!(e.steepness.is_some());
        assert!(e.intercept.contains("negative y axis at (0, -1.5)"));
        assert_eq!(e.paragraphs().len(), 3);
    }

    #[test]
    fn chinese_wording() {
        let e = explain(2.0, 3.0, Language::Chinese);
        assert!(e.slope.as_deref().unwrap().contains("右上方"));
        assert!(e.intercept.contains("正半轴"));
        assert_eq!(e.equation, "函数表达式：y = 2x + 3");
    }

    #[test]
    fn display_joins_paragraphs() {
        let text = explain(1.0, 0.0, Language::English).to_string();
        assert_eq!(text.matches("\n\n").count(), 2);
    }

    #[test]
    fn parses_language_codes() {
        assert_eq!("zh".parse::<Language>(), Ok(Language::Chinese));
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::English.next(), Language::Chinese);
    }
}
