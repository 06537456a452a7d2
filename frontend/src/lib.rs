//! Utilities Email Tracker card for the Home Assistant dashboard.
//!
//! Loading the compiled module registers two custom elements:
//! - `utilities-email-tracker-card`: the bill card (`components::card`).
//! - `utilities-email-tracker-card-editor`: its config form (`components::editor`).
//!
//! All selection and formatting logic lives in the `common` crate; this crate
//! only adapts it to the host's JS objects and renders it with Yew.

use log::LevelFilter;
use wasm_bindgen::prelude::*;

mod components;
mod elements;
mod host;
mod logger;
mod registry;
mod styles;

pub use elements::{CardElement, EditorElement};

#[wasm_bindgen(start)]
pub fn start() {
    logger::init(LevelFilter::Info);

    if let Err(err) = registry::register_elements() {
        log::error!("could not register card elements: {:?}", err);
    }
}
