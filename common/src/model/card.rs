//! Identity of the card as the host's registry sees it.

use serde::Serialize;
use serde_json::{json, Value};

pub const CARD_VERSION: &str = "0.1.0";
pub const CARD_TAG: &str = "utilities-email-tracker-card";
pub const EDITOR_TAG: &str = "utilities-email-tracker-card-editor";
pub const CARD_NAME: &str = "Utilities Email Tracker Card";
pub const CARD_DESCRIPTION: &str =
    "Display the most recent utility bill parsed by the Utilities Email Tracker integration.";

/// Rows the host should reserve for the card.
pub const CARD_SIZE: u32 = 3;

/// Entry appended to the host's `customCards` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDescriptor {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: bool,
    pub version: &'static str,
}

impl CardDescriptor {
    pub fn current() -> Self {
        Self {
            card_type: CARD_TAG,
            name: CARD_NAME,
            description: CARD_DESCRIPTION,
            preview: true,
            version: CARD_VERSION,
        }
    }
}

/// Config type discriminator stored in dashboard layouts.
pub fn card_type() -> String {
    format!("custom:{}", CARD_TAG)
}

/// Starting configuration proposed when a user adds the card.
///
/// Picks the first `sensor.` entity, or leaves the entity empty.
pub fn stub_config<S: AsRef<str>>(entities: &[S]) -> Value {
    let entity = entities
        .iter()
        .map(|id| id.as_ref())
        .find(|id| id.starts_with("sensor."))
        .unwrap_or("");

    json!({
        "type": card_type(),
        "entity": entity,
    })
}
