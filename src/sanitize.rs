//! Per-key sanitize-and-validate rules
//!
//! Every rule is a pure function of the candidate value: it either returns
//! the normalized value to store, substitutes the default, or rejects the
//! input with a diagnostic carrying the key name and the offending value.
//! The store dispatches each key to its rule before any write.

use crate::defaults::{DEFAULT_OPTIONS, OptionKey};
use crate::types::{CursorStyle, FontWeight, OptionValue, OptionsError, Theme, WindowOptions};

type Result<T> = std::result::Result<T, OptionsError>;

fn not_valid(key: OptionKey, value: &OptionValue) -> OptionsError {
    OptionsError::invalid(key, format!("\"{value}\" is not a valid value for {key}"))
}

/// Falsy input substitutes the default; otherwise the tag must be one of the
/// closed style set.
pub(crate) fn cursor_style(key: OptionKey, value: OptionValue) -> Result<CursorStyle> {
    if value.is_falsy() {
        return Ok(DEFAULT_OPTIONS.cursor_style);
    }
    match &value {
        OptionValue::Str(tag) => CursorStyle::from_tag(tag).ok_or_else(|| not_valid(key, &value)),
        _ => Err(not_valid(key, &value)),
    }
}

/// Falsy input substitutes the default; any other string is accepted as-is.
pub(crate) fn word_separator(key: OptionKey, value: OptionValue) -> Result<String> {
    if value.is_falsy() {
        return Ok(DEFAULT_OPTIONS.word_separator.clone());
    }
    match value {
        OptionValue::Str(separator) => Ok(separator),
        other => Err(not_valid(key, &other)),
    }
}

/// A number in `[1, 1000]` or a named tag is accepted; anything else falls
/// back to the default. Never an error.
pub(crate) fn font_weight(value: OptionValue, default: FontWeight) -> FontWeight {
    match value {
        OptionValue::Int(weight) if (1..=1000).contains(&weight) => {
            FontWeight::Numeric(weight as u16)
        }
        OptionValue::Float(weight) if weight.fract() == 0.0 && (1.0..=1000.0).contains(&weight) => {
            FontWeight::Numeric(weight as u16)
        }
        OptionValue::Str(tag) => FontWeight::from_tag(&tag).unwrap_or(default),
        _ => default,
    }
}

/// Truncate first, then apply the minimum-of-one check to the truncated
/// value, so `0.9` fails and `2.9` stores as `2`.
pub(crate) fn cursor_width(key: OptionKey, value: OptionValue) -> Result<u32> {
    let number = value.as_number().ok_or_else(|| not_valid(key, &value))?;
    if number.is_nan() {
        return Err(not_valid(key, &value));
    }
    let floored = number.floor();
    if floored < 1.0 {
        return Err(OptionsError::invalid(
            key,
            format!("{key} cannot be less than 1, value: {floored}"),
        ));
    }
    Ok(floored as u32)
}

pub(crate) fn line_height(key: OptionKey, value: OptionValue) -> Result<f64> {
    let number = value.as_number().ok_or_else(|| not_valid(key, &value))?;
    if number.is_nan() {
        return Err(not_valid(key, &value));
    }
    if number < 1.0 {
        return Err(OptionsError::invalid(
            key,
            format!("{key} cannot be less than 1, value: {number}"),
        ));
    }
    Ok(number)
}

pub(crate) fn tab_stop_width(key: OptionKey, value: OptionValue) -> Result<u16> {
    let width = value.as_integer().ok_or_else(|| not_valid(key, &value))?;
    if width < 1 {
        return Err(OptionsError::invalid(
            key,
            format!("{key} cannot be less than 1, value: {width}"),
        ));
    }
    u16::try_from(width).map_err(|_| not_valid(key, &value))
}

/// Round to one decimal place, then clamp into `[1, 21]`.
pub(crate) fn contrast_ratio(key: OptionKey, value: OptionValue) -> Result<f64> {
    let ratio = value.as_number().ok_or_else(|| not_valid(key, &value))?;
    if ratio.is_nan() {
        return Err(not_valid(key, &value));
    }
    Ok(((ratio * 10.0).round() / 10.0).clamp(1.0, 21.0))
}

/// Negative input is rejected before the cap is applied; oversized input is
/// clamped to the largest supported buffer length.
pub(crate) fn scrollback(key: OptionKey, value: OptionValue) -> Result<u32> {
    let lines = value.as_integer().ok_or_else(|| not_valid(key, &value))?;
    if lines < 0 {
        return Err(OptionsError::invalid(
            key,
            format!("{key} cannot be less than 0, value: {lines}"),
        ));
    }
    Ok(lines.min(i64::from(u32::MAX)) as u32)
}

pub(crate) fn sensitivity(key: OptionKey, value: OptionValue) -> Result<f64> {
    let multiplier = value.as_number().ok_or_else(|| not_valid(key, &value))?;
    if multiplier.is_nan() {
        return Err(not_valid(key, &value));
    }
    if multiplier <= 0.0 {
        return Err(OptionsError::invalid(
            key,
            format!("{key} cannot be less than or equal to 0, value: {multiplier}"),
        ));
    }
    Ok(multiplier)
}

/// Zero is a legal dimension; every other falsy input (absent, NaN, empty
/// string) is rejected as non-numeric.
pub(crate) fn dimension(key: OptionKey, value: OptionValue) -> Result<u16> {
    let numeric_zero = matches!(value, OptionValue::Int(0))
        || matches!(&value, OptionValue::Float(f) if *f == 0.0);
    if value.is_falsy() && !numeric_zero {
        return Err(OptionsError::invalid(
            key,
            format!("{key} must be numeric, value: {value}"),
        ));
    }
    let cells = value.as_integer().ok_or_else(|| not_valid(key, &value))?;
    u16::try_from(cells).map_err(|_| not_valid(key, &value))
}

pub(crate) fn optional_dimension(key: OptionKey, value: OptionValue) -> Result<Option<u16>> {
    if matches!(value, OptionValue::None) {
        return Ok(None);
    }
    let width = value.as_integer().ok_or_else(|| not_valid(key, &value))?;
    u16::try_from(width).map(Some).map_err(|_| not_valid(key, &value))
}

// Conformance checks for the pass-through keys. The dynamic surface accepts
// any `OptionValue`; the typed record does not.

pub(crate) fn expect_bool(key: OptionKey, value: OptionValue) -> Result<bool> {
    match value {
        OptionValue::Bool(flag) => Ok(flag),
        other => Err(not_valid(key, &other)),
    }
}

pub(crate) fn expect_string(key: OptionKey, value: OptionValue) -> Result<String> {
    match value {
        OptionValue::Str(text) => Ok(text),
        other => Err(not_valid(key, &other)),
    }
}

pub(crate) fn expect_number(key: OptionKey, value: OptionValue) -> Result<f64> {
    match value.as_number() {
        Some(number) if !number.is_nan() => Ok(number),
        _ => Err(not_valid(key, &value)),
    }
}

pub(crate) fn expect_uint(key: OptionKey, value: OptionValue) -> Result<u32> {
    let number = value.as_integer().ok_or_else(|| not_valid(key, &value))?;
    u32::try_from(number).map_err(|_| not_valid(key, &value))
}

pub(crate) fn expect_theme(key: OptionKey, value: OptionValue) -> Result<Theme> {
    match value {
        OptionValue::Theme(theme) => Ok(theme),
        other => Err(not_valid(key, &other)),
    }
}

pub(crate) fn expect_window_options(key: OptionKey, value: OptionValue) -> Result<WindowOptions> {
    match value {
        OptionValue::WindowOptions(options) => Ok(options),
        other => Err(not_valid(key, &other)),
    }
}
