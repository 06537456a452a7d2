//! Shared, host-independent logic for the utility bill card.
//!
//! Everything in this crate is pure and synchronous: configuration
//! normalization, bill selection, field resolution and the editor's
//! working-config binding. The `frontend` crate wraps it in custom elements.

pub mod editor;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod resolve;
pub mod select;
pub mod view;

pub use error::{ConfigError, FormatError};
pub use model::bill::BillRecord;
pub use model::config::{DisplayConfig, FieldKey};
pub use model::hass::{EntityState, HassSnapshot, LocaleSettings};
