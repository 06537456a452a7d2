//! Rust side of the two custom elements.
//!
//! The JS classes defined in `registry` forward `setConfig` and the `hass`
//! setter to these structs. Each one owns its host element, mounts a Yew app
//! into it on first use, and then only updates that app's props.

use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};
use yew::{AppHandle, Callback};

use common::editor::ConfigChanged;
use common::model::config::DisplayConfig;
use common::normalize::normalize_config;

use crate::components::card::{BillCard, BillCardProps};
use crate::components::editor::{CardEditor, CardEditorProps};
use crate::host;
use crate::styles::{CARD_STYLE, EDITOR_STYLE};

#[wasm_bindgen]
pub struct CardElement {
    host: HtmlElement,
    config: Option<Rc<DisplayConfig>>,
    hass: Option<JsValue>,
    app: Option<AppHandle<BillCard>>,
    style_injected: bool,
}

#[wasm_bindgen]
impl CardElement {
    /// Normalizes and stores the config. Throws when the entity is missing,
    /// leaving any previous config in place.
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let raw = host::js_to_json(&config)?;
        let config = normalize_config(&raw).map_err(|err| JsValue::from(js_sys::Error::new(&err.to_string())))?;

        self.config = Some(Rc::new(config));
        inject_style(&self.host, CARD_STYLE, &mut self.style_injected);
        self.render();
        Ok(())
    }

    pub fn set_hass(&mut self, hass: JsValue) {
        self.hass = Some(hass);
        self.render();
    }
}

impl CardElement {
    pub fn new(host: HtmlElement) -> Self {
        Self {
            host,
            config: None,
            hass: None,
            app: None,
            style_injected: false,
        }
    }

    fn render(&mut self) {
        let (Some(config), Some(hass)) = (&self.config, &self.hass) else {
            return;
        };
        let props = BillCardProps {
            config: Rc::clone(config),
            snapshot: Rc::new(host::snapshot_from_hass(hass, Some(&config.entity))),
        };

        if let Some(app) = self.app.as_mut() {
            app.update(props);
            return;
        }
        match mount_root(&self.host) {
            Ok(root) => self.app = Some(yew::Renderer::<BillCard>::with_root_and_props(root, props).render()),
            Err(err) => log::error!("could not mount bill card: {:?}", err),
        }
    }
}

#[wasm_bindgen]
pub struct EditorElement {
    host: HtmlElement,
    config: Rc<Value>,
    hass: Option<JsValue>,
    on_config_changed: Callback<ConfigChanged>,
    app: Option<AppHandle<CardEditor>>,
    style_injected: bool,
}

#[wasm_bindgen]
impl EditorElement {
    /// Stores the raw config. The editor accepts partial configs.
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        self.config = Rc::new(host::js_to_json(&config)?);
        self.render();
        Ok(())
    }

    pub fn set_hass(&mut self, hass: JsValue) {
        self.hass = Some(hass);
        self.render();
    }
}

impl EditorElement {
    pub fn new(host: HtmlElement) -> Self {
        let target = host.clone();
        let on_config_changed = Callback::from(move |changed: ConfigChanged| {
            if let Err(err) = host::dispatch_config_changed(&target, &changed) {
                log::error!("could not dispatch config change: {:?}", err);
            }
        });

        Self {
            host,
            config: Rc::new(Value::Null),
            hass: None,
            on_config_changed,
            app: None,
            style_injected: false,
        }
    }

    /// Renders once `hass` is known; the entity list depends on it.
    fn render(&mut self) {
        let Some(hass) = &self.hass else {
            return;
        };
        let props = CardEditorProps {
            config: Rc::clone(&self.config),
            snapshot: Rc::new(host::snapshot_from_hass(hass, None)),
            on_config_changed: self.on_config_changed.clone(),
        };

        inject_style(&self.host, EDITOR_STYLE, &mut self.style_injected);
        if let Some(app) = self.app.as_mut() {
            app.update(props);
            return;
        }
        match mount_root(&self.host) {
            Ok(root) => self.app = Some(yew::Renderer::<CardEditor>::with_root_and_props(root, props).render()),
            Err(err) => log::error!("could not mount card editor: {:?}", err),
        }
    }
}

/// Appends a `<style>` to `host` unless `injected` is already set.
fn inject_style(host: &HtmlElement, css: &str, injected: &mut bool) {
    if *injected {
        return;
    }
    let Some(document) = host.owner_document() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(css));
            if host.append_child(&style).is_ok() {
                *injected = true;
            }
        }
        Err(err) => log::error!("could not create style element: {:?}", err),
    }
}

/// Creates the container the Yew app renders into, leaving the host's other
/// children (the injected style) alone.
fn mount_root(host: &HtmlElement) -> Result<Element, JsValue> {
    let document = host
        .owner_document()
        .ok_or_else(|| JsValue::from_str("host element has no document"))?;
    let root = document.create_element("div")?;
    host.append_child(&root)?;
    Ok(root)
}
