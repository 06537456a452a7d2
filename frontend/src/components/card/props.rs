use std::rc::Rc;

use yew::prelude::*;

use common::model::config::DisplayConfig;
use common::model::hass::HassSnapshot;

/// Properties for the `BillCard`.
#[derive(Properties, PartialEq, Clone)]
pub struct BillCardProps {
    /// Normalized configuration, replaced only when the host calls `setConfig`.
    pub config: Rc<DisplayConfig>,

    /// State of the configured entity plus the host locale.
    pub snapshot: Rc<HassSnapshot>,
}
