//! The default table: every recognized option and its default value
//!
//! The key set is fixed at compile time; a name that does not resolve to an
//! [`OptionKey`] is not an option anywhere in the system. The table itself is
//! process-wide immutable data with no lifecycle beyond first use.

use once_cell::sync::Lazy;
use std::fmt;

use crate::types::{CursorStyle, FontWeight, Theme, WindowOptions};

/// Closed set of recognized option keys.
///
/// The canonical string name of each key (used on the string-keyed
/// `get`/`set` surface and in diagnostics) is the camelCase form returned by
/// [`OptionKey::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Cols,
    Rows,
    CursorBlink,
    CursorStyle,
    CursorWidth,
    CustomGlyphs,
    DrawBoldTextInBrightColors,
    FastScrollModifier,
    FastScrollSensitivity,
    FontFamily,
    FontSize,
    FontWeight,
    FontWeightBold,
    LetterSpacing,
    LineHeight,
    MinimumContrastRatio,
    Scrollback,
    ScrollSensitivity,
    ScreenReaderMode,
    SmoothScrollDuration,
    MacOptionIsMeta,
    MacOptionClickForcesSelection,
    DisableStdin,
    AllowTransparency,
    TabStopWidth,
    Theme,
    RightClickSelectsWord,
    WindowOptions,
    WindowsMode,
    WordSeparator,
    AltClickMovesCursor,
    ConvertEol,
    TermName,
    OverviewRulerWidth,
}

impl OptionKey {
    /// Every recognized key, in declaration order.
    pub const ALL: [OptionKey; 34] = [
        OptionKey::Cols,
        OptionKey::Rows,
        OptionKey::CursorBlink,
        OptionKey::CursorStyle,
        OptionKey::CursorWidth,
        OptionKey::CustomGlyphs,
        OptionKey::DrawBoldTextInBrightColors,
        OptionKey::FastScrollModifier,
        OptionKey::FastScrollSensitivity,
        OptionKey::FontFamily,
        OptionKey::FontSize,
        OptionKey::FontWeight,
        OptionKey::FontWeightBold,
        OptionKey::LetterSpacing,
        OptionKey::LineHeight,
        OptionKey::MinimumContrastRatio,
        OptionKey::Scrollback,
        OptionKey::ScrollSensitivity,
        OptionKey::ScreenReaderMode,
        OptionKey::SmoothScrollDuration,
        OptionKey::MacOptionIsMeta,
        OptionKey::MacOptionClickForcesSelection,
        OptionKey::DisableStdin,
        OptionKey::AllowTransparency,
        OptionKey::TabStopWidth,
        OptionKey::Theme,
        OptionKey::RightClickSelectsWord,
        OptionKey::WindowOptions,
        OptionKey::WindowsMode,
        OptionKey::WordSeparator,
        OptionKey::AltClickMovesCursor,
        OptionKey::ConvertEol,
        OptionKey::TermName,
        OptionKey::OverviewRulerWidth,
    ];

    /// Canonical string name of this key.
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::Cols => "cols",
            OptionKey::Rows => "rows",
            OptionKey::CursorBlink => "cursorBlink",
            OptionKey::CursorStyle => "cursorStyle",
            OptionKey::CursorWidth => "cursorWidth",
            OptionKey::CustomGlyphs => "customGlyphs",
            OptionKey::DrawBoldTextInBrightColors => "drawBoldTextInBrightColors",
            OptionKey::FastScrollModifier => "fastScrollModifier",
            OptionKey::FastScrollSensitivity => "fastScrollSensitivity",
            OptionKey::FontFamily => "fontFamily",
            OptionKey::FontSize => "fontSize",
            OptionKey::FontWeight => "fontWeight",
            OptionKey::FontWeightBold => "fontWeightBold",
            OptionKey::LetterSpacing => "letterSpacing",
            OptionKey::LineHeight => "lineHeight",
            OptionKey::MinimumContrastRatio => "minimumContrastRatio",
            OptionKey::Scrollback => "scrollback",
            OptionKey::ScrollSensitivity => "scrollSensitivity",
            OptionKey::ScreenReaderMode => "screenReaderMode",
            OptionKey::SmoothScrollDuration => "smoothScrollDuration",
            OptionKey::MacOptionIsMeta => "macOptionIsMeta",
            OptionKey::MacOptionClickForcesSelection => "macOptionClickForcesSelection",
            OptionKey::DisableStdin => "disableStdin",
            OptionKey::AllowTransparency => "allowTransparency",
            OptionKey::TabStopWidth => "tabStopWidth",
            OptionKey::Theme => "theme",
            OptionKey::RightClickSelectsWord => "rightClickSelectsWord",
            OptionKey::WindowOptions => "windowOptions",
            OptionKey::WindowsMode => "windowsMode",
            OptionKey::WordSeparator => "wordSeparator",
            OptionKey::AltClickMovesCursor => "altClickMovesCursor",
            OptionKey::ConvertEol => "convertEol",
            OptionKey::TermName => "termName",
            OptionKey::OverviewRulerWidth => "overviewRulerWidth",
        }
    }

    /// Resolve a string name to a key. `None` means the name is not a
    /// recognized option.
    pub fn from_name(name: &str) -> Option<Self> {
        OptionKey::ALL.iter().copied().find(|key| key.name() == name)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full option record: one typed field per key.
///
/// A value of this type is both the default table ([`DEFAULT_OPTIONS`]) and
/// the live configuration owned by a store. All fields are public for
/// reading; writes go through the store so they are validated and observed.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalOptions {
    pub cols: u16,
    pub rows: u16,
    pub cursor_blink: bool,
    pub cursor_style: CursorStyle,
    pub cursor_width: u32,
    pub custom_glyphs: bool,
    pub draw_bold_text_in_bright_colors: bool,
    pub fast_scroll_modifier: String,
    pub fast_scroll_sensitivity: f64,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_weight_bold: FontWeight,
    pub letter_spacing: f64,
    pub line_height: f64,
    pub minimum_contrast_ratio: f64,
    pub scrollback: u32,
    pub scroll_sensitivity: f64,
    pub screen_reader_mode: bool,
    pub smooth_scroll_duration: u32,
    pub mac_option_is_meta: bool,
    pub mac_option_click_forces_selection: bool,
    pub disable_stdin: bool,
    pub allow_transparency: bool,
    pub tab_stop_width: u16,
    pub theme: Theme,
    pub right_click_selects_word: bool,
    pub window_options: WindowOptions,
    pub windows_mode: bool,
    pub word_separator: String,
    pub alt_click_moves_cursor: bool,
    pub convert_eol: bool,
    pub term_name: String,
    pub overview_ruler_width: Option<u16>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            cursor_blink: false,
            cursor_style: CursorStyle::Block,
            cursor_width: 1,
            custom_glyphs: true,
            draw_bold_text_in_bright_colors: true,
            fast_scroll_modifier: "alt".to_string(),
            fast_scroll_sensitivity: 5.0,
            font_family: "courier-new, courier, monospace".to_string(),
            font_size: 15.0,
            font_weight: FontWeight::Normal,
            font_weight_bold: FontWeight::Bold,
            letter_spacing: 0.0,
            line_height: 1.0,
            minimum_contrast_ratio: 1.0,
            scrollback: 1000,
            scroll_sensitivity: 1.0,
            screen_reader_mode: false,
            smooth_scroll_duration: 0,
            mac_option_is_meta: false,
            mac_option_click_forces_selection: false,
            disable_stdin: false,
            allow_transparency: false,
            tab_stop_width: 8,
            theme: Theme::default(),
            right_click_selects_word: cfg!(target_os = "macos"),
            window_options: WindowOptions::default(),
            windows_mode: false,
            word_separator: " ()[]{}',\"`".to_string(),
            alt_click_moves_cursor: true,
            convert_eol: false,
            term_name: "xterm".to_string(),
            overview_ruler_width: None,
        }
    }
}

/// Shared immutable default table. Built once, never mutated.
pub static DEFAULT_OPTIONS: Lazy<TerminalOptions> = Lazy::new(TerminalOptions::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn test_unrecognized_name() {
        assert_eq!(OptionKey::from_name("doesNotExist"), None);
        assert_eq!(OptionKey::from_name("Cols"), None);
        assert_eq!(OptionKey::from_name(""), None);
    }

    #[test]
    fn test_default_values() {
        let defaults = &*DEFAULT_OPTIONS;
        assert_eq!(defaults.cols, 80);
        assert_eq!(defaults.rows, 24);
        assert_eq!(defaults.cursor_style, CursorStyle::Block);
        assert_eq!(defaults.scrollback, 1000);
        assert_eq!(defaults.word_separator, " ()[]{}',\"`");
        assert_eq!(defaults.font_weight, FontWeight::Normal);
        assert_eq!(defaults.overview_ruler_width, None);
    }
}
