//! Colorized thousands-grouping of integers.

use std::fmt;
use std::str::FromStr;

use nu_ansi_term::{Color, Style};
use serde::{Deserialize, Serialize};

use crate::error::{NiceNumError, Result};
use crate::value::Value;

const RESET_CODE: &str = "\x1b[0m";

/// A color (or style) from the fixed terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    White,
    Underline,
    Reset,
}

impl ColorName {
    /// Valid color names, for error messages.
    pub const VALID: &'static [&'static str] = &[
        "black",
        "red",
        "green",
        "yellow",
        "blue",
        "cyan",
        "white",
        "underline",
        "reset",
    ];

    /// Default cycling palette for thousands groups.
    pub const DEFAULT_CYCLE: [ColorName; 4] = [
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
    ];

    /// String form of the color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
            ColorName::Underline => "underline",
            ColorName::Reset => "reset",
        }
    }

    /// The escape sequence that starts this color.
    pub fn code(&self) -> String {
        match self {
            ColorName::Reset => RESET_CODE.to_string(),
            ColorName::Underline => Style::new().underline().prefix().to_string(),
            _ => self.style().prefix().to_string(),
        }
    }

    fn style(&self) -> Style {
        let color = match self {
            ColorName::Black => Color::Black,
            ColorName::Red => Color::Red,
            ColorName::Green => Color::Green,
            ColorName::Yellow => Color::Yellow,
            ColorName::Blue => Color::Blue,
            ColorName::Cyan => Color::Cyan,
            ColorName::White => Color::White,
            ColorName::Underline | ColorName::Reset => return Style::new(),
        };
        Style::new().fg(color)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = NiceNumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "black" => Ok(ColorName::Black),
            "red" => Ok(ColorName::Red),
            "green" => Ok(ColorName::Green),
            "yellow" => Ok(ColorName::Yellow),
            "blue" => Ok(ColorName::Blue),
            "cyan" => Ok(ColorName::Cyan),
            "white" => Ok(ColorName::White),
            "underline" => Ok(ColorName::Underline),
            "reset" => Ok(ColorName::Reset),
            _ => Err(NiceNumError::InvalidColor {
                name: s.to_string(),
                valid: ColorName::VALID,
            }),
        }
    }
}

/// Options for cell-level colorizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorOptions {
    /// Cycling palette; empty falls back to the default cycle.
    pub colors: Vec<ColorName>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            colors: ColorName::DEFAULT_CYCLE.to_vec(),
        }
    }
}

/// Render an integer with each thousands group wrapped in a cycling color.
///
/// Groups of three digits are counted from the right; the leftmost group
/// may be shorter. Each group is wrapped in the next color of the cycle
/// followed by a reset code.
///
/// # Examples
///
/// ```
/// use nicenum::{to_color, ColorName};
///
/// let out = to_color(1234, &ColorName::DEFAULT_CYCLE);
/// assert_eq!(out, "\x1b[31m1\x1b[0m\x1b[32m234\x1b[0m");
/// ```
pub fn to_color(number: u128, colors: &[ColorName]) -> String {
    let cycle: &[ColorName] = if colors.is_empty() {
        &ColorName::DEFAULT_CYCLE
    } else {
        colors
    };

    let digits = number.to_string();
    let offset = digits.len() % 3;

    let mut groups = Vec::new();
    if offset != 0 {
        groups.push(&digits[..offset]);
    }
    let mut i = offset;
    while i < digits.len() {
        groups.push(&digits[i..i + 3]);
        i += 3;
    }

    let mut out = String::new();
    for (idx, group) in groups.iter().enumerate() {
        out.push_str(&cycle[idx % cycle.len()].code());
        out.push_str(group);
        out.push_str(RESET_CODE);
    }
    out
}

/// Cell-level colorizer: non-negative integer cells only.
///
/// Failures always propagate; the colorizer takes no coerce policy.
pub fn color_value(value: &Value, opts: &ColorOptions) -> Result<Value> {
    match value {
        Value::Int(i) if *i >= 0 => Ok(Value::Str(to_color(*i as u128, &opts.colors))),
        other => Err(NiceNumError::NotInteger {
            value: match other {
                Value::Na => "<NA>".to_string(),
                v => v.to_string(),
            },
        }),
    }
}
