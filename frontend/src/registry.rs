//! Registers the card and its editor with the host dashboard.
//!
//! Custom element classes must be real JS classes extending `HTMLElement`, so
//! a small class body is compiled with `Function` and wired to Rust through
//! closures. Each element is defined only once, even if the module is loaded
//! twice.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use common::model::card::{stub_config, CardDescriptor, CARD_SIZE, CARD_TAG, CARD_VERSION, EDITOR_TAG};

use crate::elements::{CardElement, EditorElement};
use crate::host;

const CARD_CLASS: &str = r#"
return class extends HTMLElement {
  setConfig(config) {
    this._element = this._element || mount(this);
    this._element.set_config(config);
  }

  set hass(hass) {
    this._element = this._element || mount(this);
    this._element.set_hass(hass);
  }

  getCardSize() {
    return size;
  }

  static getConfigElement() {
    return document.createElement(editorTag);
  }

  static getStubConfig(hass, entities) {
    return stub(entities || []);
  }
};
"#;

const EDITOR_CLASS: &str = r#"
return class extends HTMLElement {
  setConfig(config) {
    this._element = this._element || mount(this);
    this._element.set_config(config);
  }

  set hass(hass) {
    this._element = this._element || mount(this);
    this._element.set_hass(hass);
  }
};
"#;

pub fn register_elements() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let registry = window.custom_elements();

    if registry.get(CARD_TAG).is_undefined() {
        registry.define(CARD_TAG, &card_class()?)?;
        announce_card(&window)?;
        gloo_console::info!(
            format!("%cUTILITIES-EMAIL-TRACKER-CARD {}", CARD_VERSION),
            "color: #4caf50; font-weight: 700;"
        );
    }

    if registry.get(EDITOR_TAG).is_undefined() {
        registry.define(EDITOR_TAG, &editor_class()?)?;
    }

    Ok(())
}

fn card_class() -> Result<Function, JsValue> {
    let mount = Closure::<dyn Fn(HtmlElement) -> JsValue>::new(|element: HtmlElement| {
        JsValue::from(CardElement::new(element))
    });
    let stub = Closure::<dyn Fn(JsValue) -> JsValue>::new(|entities: JsValue| {
        let entities: Vec<String> = Array::from(&entities)
            .iter()
            .filter_map(|entity| entity.as_string())
            .collect();
        host::json_to_js(&stub_config(&entities)).unwrap_or(JsValue::NULL)
    });

    let factory = Function::new_with_args("mount, stub, editorTag, size", CARD_CLASS);
    let args = Array::of4(
        &mount.into_js_value(),
        &stub.into_js_value(),
        &JsValue::from_str(EDITOR_TAG),
        &JsValue::from(CARD_SIZE),
    );
    factory.apply(&JsValue::NULL, &args)?.dyn_into()
}

fn editor_class() -> Result<Function, JsValue> {
    let mount = Closure::<dyn Fn(HtmlElement) -> JsValue>::new(|element: HtmlElement| {
        JsValue::from(EditorElement::new(element))
    });

    let factory = Function::new_with_args("mount", EDITOR_CLASS);
    factory.call1(&JsValue::NULL, &mount.into_js_value())?.dyn_into()
}

/// Appends the card descriptor to `window.customCards`, creating the list if
/// the host has not yet.
fn announce_card(window: &Window) -> Result<(), JsValue> {
    let key = JsValue::from_str("customCards");
    let existing = Reflect::get(window, &key)?;
    let cards: Array = if Array::is_array(&existing) {
        existing.unchecked_into()
    } else {
        let cards = Array::new();
        Reflect::set(window, &key, &cards)?;
        cards
    };

    let descriptor = serde_json::to_value(CardDescriptor::current())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    cards.push(&host::json_to_js(&descriptor)?);
    Ok(())
}
