//! Defines the properties for the `CardEditor`.

use std::rc::Rc;

use serde_json::Value;
use yew::prelude::*;

use common::editor::ConfigChanged;
use common::model::hass::HassSnapshot;

/// Properties for the `CardEditor`.
#[derive(Properties, PartialEq, Clone)]
pub struct CardEditorProps {
    /// The raw config object as last set by the host. It is not normalized, so
    /// partial configs (no entity yet) are editable.
    pub config: Rc<Value>,

    /// Every entity state, used to offer bill sources.
    pub snapshot: Rc<HassSnapshot>,

    /// Receives the full working config after each edit.
    pub on_config_changed: Callback<ConfigChanged>,
}
