//! Validated, observable option store for a terminal emulator core
//!
//! The store merges caller-supplied overrides onto a fixed default table,
//! runs every value through a per-key sanitize-and-validate rule, and
//! notifies subscribers with the key after each committed change:
//!
//! - Construction never fails: invalid overrides are logged through the
//!   [`log`] facade and degrade to the default; unrecognized keys are
//!   ignored.
//! - `set` rejects unknown keys and invalid values with typed errors, and
//!   emits nothing when the sanitized value equals the stored one.
//! - Notification is synchronous and ordered: subscribers run in
//!   registration order, on the writing thread, before `set` returns.
//!
//! The store is single-threaded by design (subscriptions use `Rc`) and
//! holds no external resources. Hosts that share it across threads must add
//! their own synchronization.
//!
//! ```
//! use term_options::{OptionValue, OptionsStore};
//!
//! let mut store = OptionsStore::new([("scrollback", OptionValue::Int(5000))]);
//! let _watch = store.on_option_change(|key| println!("{key} changed"));
//!
//! store.set("cursorStyle", "underline").unwrap();
//! assert_eq!(store.options().scrollback, 5000);
//! ```

pub mod defaults;
pub mod events;
mod sanitize;
pub mod store;
pub mod types;

pub use defaults::{DEFAULT_OPTIONS, OptionKey, TerminalOptions};
pub use events::Subscription;
pub use store::OptionsStore;
pub use types::{CursorStyle, FontWeight, OptionValue, OptionsError, Theme, WindowOptions};
