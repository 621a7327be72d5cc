//! Core types for the options store
//!
//! `OptionValue` is the dynamically-typed value that crosses the `get`/`set`
//! boundary; the domain enums and nested structures (`CursorStyle`,
//! `FontWeight`, `Theme`, `WindowOptions`) are the typed shapes the store
//! actually holds.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::defaults::OptionKey;

/// Error raised by the store's read/write surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The key is not in the recognized option set.
    #[error(r#"No option with key "{key}""#)]
    UnknownOption { key: String },
    /// The value failed the key's sanitize-and-validate rule.
    #[error("{message}")]
    InvalidValue { key: OptionKey, message: String },
}

impl OptionsError {
    pub(crate) fn unknown(key: &str) -> Self {
        Self::UnknownOption { key: key.to_string() }
    }

    pub(crate) fn invalid(key: OptionKey, message: String) -> Self {
        Self::InvalidValue { key, message }
    }
}

/// How the cursor is drawn in the cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    Block,
    Underline,
    Bar,
}

impl CursorStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CursorStyle::Block => "block",
            CursorStyle::Underline => "underline",
            CursorStyle::Bar => "bar",
        }
    }

    /// Parse one of the closed set of style tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "block" => Some(CursorStyle::Block),
            "underline" => Some(CursorStyle::Underline),
            "bar" => Some(CursorStyle::Bar),
            _ => None,
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Font weight: a named tag or a numeric weight in `[1, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
    Numeric(u16),
}

impl FontWeight {
    /// Parse a named weight tag (`"normal"`, `"bold"`, `"100"` … `"900"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            _ => tag
                .parse::<u16>()
                .ok()
                .filter(|w| w % 100 == 0 && (100..=900).contains(w))
                .map(FontWeight::Numeric),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
            FontWeight::Numeric(w) => write!(f, "{w}"),
        }
    }
}

/// Color overrides for the terminal. Unset fields fall back to the
/// renderer's palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub cursor: Option<String>,
    pub cursor_accent: Option<String>,
    pub selection_background: Option<String>,
    pub selection_foreground: Option<String>,
}

/// Which window reporting/manipulation requests the terminal honors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowOptions {
    pub restore_win: bool,
    pub minimize_win: bool,
    pub set_win_position: bool,
    pub get_win_size_pixels: bool,
    pub get_win_size_chars: bool,
    pub push_title: bool,
    pub pop_title: bool,
}

/// A dynamically-typed option value.
///
/// This is the shape values take at the `get`/`set` boundary; the store
/// itself holds typed fields and converts at the edges.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// An absent value. Legal input only where a key is explicitly optional;
    /// everywhere else it fails validation or falls back to the default.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Theme(Theme),
    WindowOptions(WindowOptions),
}

impl OptionValue {
    /// Absent, `false`, `0`, `NaN`, or the empty string.
    ///
    /// Several rules substitute the default for falsy input rather than
    /// rejecting it, so falsiness here must match what those rules expect.
    pub(crate) fn is_falsy(&self) -> bool {
        match self {
            OptionValue::None => true,
            OptionValue::Bool(b) => !b,
            OptionValue::Int(n) => *n == 0,
            OptionValue::Float(f) => *f == 0.0 || f.is_nan(),
            OptionValue::Str(s) => s.is_empty(),
            OptionValue::Theme(_) | OptionValue::WindowOptions(_) => false,
        }
    }

    /// Numeric view of the value, if it has one.
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            OptionValue::Int(n) => Some(*n as f64),
            OptionValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integer view: an `Int`, or a `Float` with no fractional part.
    pub(crate) fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            OptionValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::None => f.write_str("undefined"),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Int(n) => write!(f, "{n}"),
            OptionValue::Float(v) => write!(f, "{v}"),
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::Theme(_) => f.write_str("[theme]"),
            OptionValue::WindowOptions(_) => f.write_str("[window options]"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(i64::from(v))
    }
}

impl From<u16> for OptionValue {
    fn from(v: u16) -> Self {
        OptionValue::Int(i64::from(v))
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        OptionValue::Int(i64::from(v))
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Str(v)
    }
}

impl From<CursorStyle> for OptionValue {
    fn from(v: CursorStyle) -> Self {
        OptionValue::Str(v.as_str().to_string())
    }
}

impl From<FontWeight> for OptionValue {
    fn from(v: FontWeight) -> Self {
        match v {
            FontWeight::Numeric(w) => OptionValue::Int(i64::from(w)),
            named => OptionValue::Str(named.to_string()),
        }
    }
}

impl From<Theme> for OptionValue {
    fn from(v: Theme) -> Self {
        OptionValue::Theme(v)
    }
}

impl From<WindowOptions> for OptionValue {
    fn from(v: WindowOptions) -> Self {
        OptionValue::WindowOptions(v)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => OptionValue::None,
        }
    }
}
