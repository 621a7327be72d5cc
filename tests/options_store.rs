use std::cell::RefCell;
use std::rc::Rc;

use term_options::{
    CursorStyle, DEFAULT_OPTIONS, FontWeight, OptionKey, OptionValue, OptionsError, OptionsStore,
    Subscription, Theme, WindowOptions,
};

/// Record every change notification a store emits.
fn record_changes(store: &OptionsStore) -> (Rc<RefCell<Vec<OptionKey>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let subscription = store.on_option_change(move |key| sink.borrow_mut().push(key));
    (seen, subscription)
}

#[test]
fn test_no_overrides_matches_default_table() {
    let store = OptionsStore::default();
    assert_eq!(*store.options(), *DEFAULT_OPTIONS);

    // every key is readable and agrees with the defaults
    for key in OptionKey::ALL {
        assert!(store.get(key.name()).is_ok(), "unreadable key {key}");
    }
    assert_eq!(store.get("cols").unwrap(), OptionValue::Int(80));
    assert_eq!(store.get("cursorStyle").unwrap(), OptionValue::Str("block".into()));
    assert_eq!(store.get("lineHeight").unwrap(), OptionValue::Float(1.0));
    assert_eq!(store.get("overviewRulerWidth").unwrap(), OptionValue::None);
}

#[test]
fn test_set_stores_sanitized_value() {
    let mut store = OptionsStore::default();

    store.set("cursorStyle", "bar").unwrap();
    assert_eq!(store.options().cursor_style, CursorStyle::Bar);
    assert_eq!(store.get("cursorStyle").unwrap(), OptionValue::Str("bar".into()));

    store.set("minimumContrastRatio", 4.449).unwrap();
    assert_eq!(store.get("minimumContrastRatio").unwrap(), OptionValue::Float(4.4));
}

#[test]
fn test_repeated_set_emits_once() {
    let mut store = OptionsStore::default();
    let (seen, _subscription) = record_changes(&store);

    store.set("cursorBlink", true).unwrap();
    store.set("cursorBlink", true).unwrap();

    assert_eq!(*seen.borrow(), vec![OptionKey::CursorBlink]);
}

#[test]
fn test_scrollback_clamps_and_rejects_negative() {
    let mut store = OptionsStore::default();

    store.set("scrollback", 5_000_000_000i64).unwrap();
    assert_eq!(store.get("scrollback").unwrap(), OptionValue::Int(4_294_967_295));

    let err = store.set("scrollback", -1).unwrap_err();
    assert!(matches!(err, OptionsError::InvalidValue { .. }));
    assert_eq!(store.options().scrollback, 4_294_967_295);
}

#[test]
fn test_contrast_ratio_bounds() {
    let mut store = OptionsStore::default();

    store.set("minimumContrastRatio", 25).unwrap();
    assert_eq!(store.get("minimumContrastRatio").unwrap(), OptionValue::Float(21.0));

    store.set("minimumContrastRatio", 0).unwrap();
    assert_eq!(store.get("minimumContrastRatio").unwrap(), OptionValue::Float(1.0));
}

#[test]
fn test_word_separator_falls_back_to_default() {
    let mut store = OptionsStore::default();

    store.set("wordSeparator", " -/").unwrap();
    store.set("wordSeparator", "").unwrap();
    assert_eq!(store.options().word_separator, DEFAULT_OPTIONS.word_separator);
}

#[test]
fn test_cursor_width_truncates_then_checks_floor() {
    let mut store = OptionsStore::default();

    let err = store.set("cursorWidth", 0.9).unwrap_err();
    assert!(matches!(err, OptionsError::InvalidValue { .. }));

    store.set("cursorWidth", 2.9).unwrap();
    assert_eq!(store.get("cursorWidth").unwrap(), OptionValue::Int(2));
}

#[test]
fn test_unknown_key_is_rejected() {
    let mut store = OptionsStore::default();

    let err = store.get("doesNotExist").unwrap_err();
    assert!(matches!(err, OptionsError::UnknownOption { .. }));
    assert_eq!(err.to_string(), r#"No option with key "doesNotExist""#);

    let err = store.set("doesNotExist", 1).unwrap_err();
    assert!(matches!(err, OptionsError::UnknownOption { .. }));
}

#[test]
fn test_subscribers_notified_in_subscription_order() {
    let mut store = OptionsStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let first = seen.clone();
    let _a = store.on_option_change(move |key| first.borrow_mut().push(("a", key)));
    let second = seen.clone();
    let _b = store.on_option_change(move |key| second.borrow_mut().push(("b", key)));

    store.set("rows", 50).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![("a", OptionKey::Rows), ("b", OptionKey::Rows)]
    );
}

#[test]
fn test_dimension_accepts_zero_but_not_absent() {
    let mut store = OptionsStore::default();

    store.set("cols", 0).unwrap();
    assert_eq!(store.get("cols").unwrap(), OptionValue::Int(0));

    let err = store.set("cols", OptionValue::None).unwrap_err();
    assert!(matches!(err, OptionsError::InvalidValue { .. }));
    assert_eq!(err.to_string(), "cols must be numeric, value: undefined");
}

#[test]
fn test_failed_set_emits_nothing() {
    let mut store = OptionsStore::default();
    let (seen, _subscription) = record_changes(&store);

    assert!(store.set("lineHeight", 0.2).is_err());
    assert!(store.set("doesNotExist", 1).is_err());

    assert!(seen.borrow().is_empty());
    assert_eq!(store.options().line_height, 1.0);
}

#[test]
fn test_dropped_subscription_stops_notifications() {
    let mut store = OptionsStore::default();
    let (seen, subscription) = record_changes(&store);

    store.set("fontSize", 13.0).unwrap();
    drop(subscription);
    store.set("fontSize", 17.0).unwrap();

    assert_eq!(*seen.borrow(), vec![OptionKey::FontSize]);
}

#[test]
fn test_construction_degrades_invalid_override_to_default() {
    let store = OptionsStore::new([
        ("cursorStyle", OptionValue::from("wobble")),
        ("scrollback", OptionValue::Int(-7)),
        ("rows", OptionValue::Int(50)),
    ]);

    assert_eq!(store.options().cursor_style, DEFAULT_OPTIONS.cursor_style);
    assert_eq!(store.options().scrollback, DEFAULT_OPTIONS.scrollback);
    assert_eq!(store.options().rows, 50);
}

#[test]
fn test_construction_sanitizes_valid_overrides() {
    let store = OptionsStore::new([
        ("minimumContrastRatio", OptionValue::Int(25)),
        ("cursorWidth", OptionValue::Float(3.7)),
    ]);

    assert_eq!(store.options().minimum_contrast_ratio, 21.0);
    assert_eq!(store.options().cursor_width, 3);
}

#[test]
fn test_construction_ignores_unrecognized_keys() {
    let store = OptionsStore::new([
        ("notAnOption", OptionValue::Int(1)),
        ("fontSize", OptionValue::Float(13.0)),
    ]);

    assert_eq!(store.options().font_size, 13.0);
    assert!(store.get("notAnOption").is_err());
}

#[test]
fn test_font_weight_never_errors() {
    let mut store = OptionsStore::default();

    store.set("fontWeight", 350).unwrap();
    assert_eq!(store.get("fontWeight").unwrap(), OptionValue::Int(350));

    // out of range and unknown tags fall back to the default
    store.set("fontWeight", 1001).unwrap();
    assert_eq!(store.options().font_weight, FontWeight::Normal);

    store.set("fontWeightBold", "lighter").unwrap();
    assert_eq!(store.options().font_weight_bold, FontWeight::Bold);

    store.set("fontWeight", "700").unwrap();
    assert_eq!(store.options().font_weight, FontWeight::Numeric(700));
}

#[test]
fn test_theme_from_host_config_commits_like_any_value() {
    let mut store = OptionsStore::default();
    let (seen, _subscription) = record_changes(&store);

    let theme: Theme = serde_json::from_str(
        r##"{"background": "#1e1e2e", "foreground": "#cdd6f4", "selectionBackground": "#45475a"}"##,
    )
    .unwrap();

    store.set("theme", theme.clone()).unwrap();
    assert_eq!(store.options().theme, theme);
    assert_eq!(*seen.borrow(), vec![OptionKey::Theme]);

    // an equal theme is not a change
    store.set("theme", theme).unwrap();
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_window_options_from_host_config() {
    let mut store = OptionsStore::default();

    let window: WindowOptions =
        serde_json::from_str(r#"{"pushTitle": true, "popTitle": true}"#).unwrap();
    store.set("windowOptions", window).unwrap();

    assert!(store.options().window_options.push_title);
    assert!(store.options().window_options.pop_title);
    assert!(!store.options().window_options.restore_win);
}

#[test]
fn test_optional_dimension_round_trip() {
    let mut store = OptionsStore::default();

    store.set("overviewRulerWidth", 14).unwrap();
    assert_eq!(store.get("overviewRulerWidth").unwrap(), OptionValue::Int(14));

    store.set("overviewRulerWidth", OptionValue::None).unwrap();
    assert_eq!(store.get("overviewRulerWidth").unwrap(), OptionValue::None);
    assert_eq!(store.options().overview_ruler_width, None);
}
