//! The options store: default merge, validated writes, change notification
//!
//! Owns the live option record, seeded from the default table overridden by
//! caller-supplied values. Every write is dispatched through the per-key
//! sanitize rule for its key; a write that does not change the stored value
//! is a no-op, and a write that does notifies subscribers synchronously with
//! the key that changed.

use crate::defaults::{DEFAULT_OPTIONS, OptionKey, TerminalOptions};
use crate::events::{OptionChangeEmitter, Subscription};
use crate::sanitize;
use crate::types::{OptionValue, OptionsError};

pub struct OptionsStore {
    raw: TerminalOptions,
    change: OptionChangeEmitter,
}

impl OptionsStore {
    /// Build a store from the default table overridden by `overrides`.
    ///
    /// Construction never fails: an override that fails validation is
    /// logged and the default kept for that key, and an override whose key
    /// is not recognized is silently ignored.
    pub fn new<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut store = Self {
            raw: DEFAULT_OPTIONS.clone(),
            change: OptionChangeEmitter::default(),
        };
        for (name, value) in overrides {
            let Some(key) = OptionKey::from_name(name) else {
                continue;
            };
            if let Err(err) = store.apply(key, value) {
                log::error!("{err}");
            }
        }
        store
    }

    /// Live typed view of the current configuration.
    pub fn options(&self) -> &TerminalOptions {
        &self.raw
    }

    /// Current value for a key by name.
    pub fn get(&self, key: &str) -> Result<OptionValue, OptionsError> {
        let key = OptionKey::from_name(key).ok_or_else(|| OptionsError::unknown(key))?;
        Ok(self.get_key(key))
    }

    /// Current value for a key.
    pub fn get_key(&self, key: OptionKey) -> OptionValue {
        let raw = &self.raw;
        match key {
            OptionKey::Cols => raw.cols.into(),
            OptionKey::Rows => raw.rows.into(),
            OptionKey::CursorBlink => raw.cursor_blink.into(),
            OptionKey::CursorStyle => raw.cursor_style.into(),
            OptionKey::CursorWidth => raw.cursor_width.into(),
            OptionKey::CustomGlyphs => raw.custom_glyphs.into(),
            OptionKey::DrawBoldTextInBrightColors => raw.draw_bold_text_in_bright_colors.into(),
            OptionKey::FastScrollModifier => raw.fast_scroll_modifier.clone().into(),
            OptionKey::FastScrollSensitivity => raw.fast_scroll_sensitivity.into(),
            OptionKey::FontFamily => raw.font_family.clone().into(),
            OptionKey::FontSize => raw.font_size.into(),
            OptionKey::FontWeight => raw.font_weight.into(),
            OptionKey::FontWeightBold => raw.font_weight_bold.into(),
            OptionKey::LetterSpacing => raw.letter_spacing.into(),
            OptionKey::LineHeight => raw.line_height.into(),
            OptionKey::MinimumContrastRatio => raw.minimum_contrast_ratio.into(),
            OptionKey::Scrollback => raw.scrollback.into(),
            OptionKey::ScrollSensitivity => raw.scroll_sensitivity.into(),
            OptionKey::ScreenReaderMode => raw.screen_reader_mode.into(),
            OptionKey::SmoothScrollDuration => raw.smooth_scroll_duration.into(),
            OptionKey::MacOptionIsMeta => raw.mac_option_is_meta.into(),
            OptionKey::MacOptionClickForcesSelection => {
                raw.mac_option_click_forces_selection.into()
            }
            OptionKey::DisableStdin => raw.disable_stdin.into(),
            OptionKey::AllowTransparency => raw.allow_transparency.into(),
            OptionKey::TabStopWidth => raw.tab_stop_width.into(),
            OptionKey::Theme => raw.theme.clone().into(),
            OptionKey::RightClickSelectsWord => raw.right_click_selects_word.into(),
            OptionKey::WindowOptions => raw.window_options.clone().into(),
            OptionKey::WindowsMode => raw.windows_mode.into(),
            OptionKey::WordSeparator => raw.word_separator.clone().into(),
            OptionKey::AltClickMovesCursor => raw.alt_click_moves_cursor.into(),
            OptionKey::ConvertEol => raw.convert_eol.into(),
            OptionKey::TermName => raw.term_name.clone().into(),
            OptionKey::OverviewRulerWidth => raw.overview_ruler_width.into(),
        }
    }

    /// Sanitize, commit, and notify for a key by name.
    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) -> Result<(), OptionsError> {
        let key = OptionKey::from_name(key).ok_or_else(|| OptionsError::unknown(key))?;
        self.set_key(key, value)
    }

    /// Sanitize, commit, and notify.
    ///
    /// On validation failure the store is untouched and no notification is
    /// emitted. A sanitized value equal to the stored one commits nothing
    /// and emits nothing. Otherwise the write lands and every subscriber is
    /// invoked with `key` before this call returns.
    pub fn set_key(
        &mut self,
        key: OptionKey,
        value: impl Into<OptionValue>,
    ) -> Result<(), OptionsError> {
        if self.apply(key, value.into())? {
            log::debug!("option {key} changed");
            self.change.emit(key);
        }
        Ok(())
    }

    /// Register a change observer. Callbacks run synchronously inside the
    /// committing `set`, in registration order, and receive the key only;
    /// read the new value through the store afterwards.
    pub fn on_option_change(&self, callback: impl Fn(OptionKey) + 'static) -> Subscription {
        self.change.subscribe(callback)
    }

    /// Dispatch `value` through the sanitize rule for `key` and write the
    /// result into the raw configuration. Returns whether the stored value
    /// changed; on error nothing is written.
    fn apply(&mut self, key: OptionKey, value: OptionValue) -> Result<bool, OptionsError> {
        let raw = &mut self.raw;
        let changed = match key {
            OptionKey::Cols => commit(&mut raw.cols, sanitize::dimension(key, value)?),
            OptionKey::Rows => commit(&mut raw.rows, sanitize::dimension(key, value)?),
            OptionKey::CursorBlink => {
                commit(&mut raw.cursor_blink, sanitize::expect_bool(key, value)?)
            }
            OptionKey::CursorStyle => {
                commit(&mut raw.cursor_style, sanitize::cursor_style(key, value)?)
            }
            OptionKey::CursorWidth => {
                commit(&mut raw.cursor_width, sanitize::cursor_width(key, value)?)
            }
            OptionKey::CustomGlyphs => {
                commit(&mut raw.custom_glyphs, sanitize::expect_bool(key, value)?)
            }
            OptionKey::DrawBoldTextInBrightColors => commit(
                &mut raw.draw_bold_text_in_bright_colors,
                sanitize::expect_bool(key, value)?,
            ),
            OptionKey::FastScrollModifier => commit(
                &mut raw.fast_scroll_modifier,
                sanitize::expect_string(key, value)?,
            ),
            OptionKey::FastScrollSensitivity => commit(
                &mut raw.fast_scroll_sensitivity,
                sanitize::sensitivity(key, value)?,
            ),
            OptionKey::FontFamily => {
                commit(&mut raw.font_family, sanitize::expect_string(key, value)?)
            }
            OptionKey::FontSize => commit(&mut raw.font_size, sanitize::expect_number(key, value)?),
            OptionKey::FontWeight => commit(
                &mut raw.font_weight,
                sanitize::font_weight(value, DEFAULT_OPTIONS.font_weight),
            ),
            OptionKey::FontWeightBold => commit(
                &mut raw.font_weight_bold,
                sanitize::font_weight(value, DEFAULT_OPTIONS.font_weight_bold),
            ),
            OptionKey::LetterSpacing => {
                commit(&mut raw.letter_spacing, sanitize::expect_number(key, value)?)
            }
            OptionKey::LineHeight => {
                commit(&mut raw.line_height, sanitize::line_height(key, value)?)
            }
            OptionKey::MinimumContrastRatio => commit(
                &mut raw.minimum_contrast_ratio,
                sanitize::contrast_ratio(key, value)?,
            ),
            OptionKey::Scrollback => commit(&mut raw.scrollback, sanitize::scrollback(key, value)?),
            OptionKey::ScrollSensitivity => commit(
                &mut raw.scroll_sensitivity,
                sanitize::sensitivity(key, value)?,
            ),
            OptionKey::ScreenReaderMode => commit(
                &mut raw.screen_reader_mode,
                sanitize::expect_bool(key, value)?,
            ),
            OptionKey::SmoothScrollDuration => commit(
                &mut raw.smooth_scroll_duration,
                sanitize::expect_uint(key, value)?,
            ),
            OptionKey::MacOptionIsMeta => {
                commit(&mut raw.mac_option_is_meta, sanitize::expect_bool(key, value)?)
            }
            OptionKey::MacOptionClickForcesSelection => commit(
                &mut raw.mac_option_click_forces_selection,
                sanitize::expect_bool(key, value)?,
            ),
            OptionKey::DisableStdin => {
                commit(&mut raw.disable_stdin, sanitize::expect_bool(key, value)?)
            }
            OptionKey::AllowTransparency => commit(
                &mut raw.allow_transparency,
                sanitize::expect_bool(key, value)?,
            ),
            OptionKey::TabStopWidth => {
                commit(&mut raw.tab_stop_width, sanitize::tab_stop_width(key, value)?)
            }
            OptionKey::Theme => commit(&mut raw.theme, sanitize::expect_theme(key, value)?),
            OptionKey::RightClickSelectsWord => commit(
                &mut raw.right_click_selects_word,
                sanitize::expect_bool(key, value)?,
            ),
            OptionKey::WindowOptions => commit(
                &mut raw.window_options,
                sanitize::expect_window_options(key, value)?,
            ),
            OptionKey::WindowsMode => {
                commit(&mut raw.windows_mode, sanitize::expect_bool(key, value)?)
            }
            OptionKey::WordSeparator => {
                commit(&mut raw.word_separator, sanitize::word_separator(key, value)?)
            }
            OptionKey::AltClickMovesCursor => commit(
                &mut raw.alt_click_moves_cursor,
                sanitize::expect_bool(key, value)?,
            ),
            OptionKey::ConvertEol => {
                commit(&mut raw.convert_eol, sanitize::expect_bool(key, value)?)
            }
            OptionKey::TermName => commit(&mut raw.term_name, sanitize::expect_string(key, value)?),
            OptionKey::OverviewRulerWidth => commit(
                &mut raw.overview_ruler_width,
                sanitize::optional_dimension(key, value)?,
            ),
        };
        Ok(changed)
    }
}

impl Default for OptionsStore {
    fn default() -> Self {
        Self::new(std::iter::empty::<(&str, OptionValue)>())
    }
}

/// Write `value` into `slot` unless it is already equal; report whether the
/// slot changed.
fn commit<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
