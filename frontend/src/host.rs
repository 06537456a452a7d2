//! Bridges between the host's JavaScript objects and the `common` types.
//!
//! The host hands the elements plain JS objects (`config`, `hass`). They are
//! copied into `serde_json` values through `JSON.stringify`, so everything past
//! this module works on owned Rust data. Locale formatting goes the other way
//! and calls the browser `Intl` API.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use js_sys::{Array, Function, Object, Reflect, JSON};
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

use common::editor::ConfigChanged;
use common::error::FormatError;
use common::format::LocaleFormatter;
use common::model::hass::{EntityState, HassSnapshot, LocaleSettings};

pub const CONFIG_CHANGED_EVENT: &str = "config-changed";

/// Deep-copies a JS value into JSON. `undefined` and `null` become `Value::Null`.
pub fn js_to_json(value: &JsValue) -> Result<Value, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text: String = JSON::stringify(value)?.into();
    serde_json::from_str(&text).map_err(|err| JsValue::from_str(&err.to_string()))
}

pub fn json_to_js(value: &Value) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    JSON::parse(&text)
}

/// Reads `object[key]`, treating any failure as `undefined`.
pub fn property(object: &JsValue, key: &str) -> JsValue {
    if object.is_undefined() || object.is_null() {
        return JsValue::UNDEFINED;
    }
    Reflect::get(object, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn string_property(object: &JsValue, key: &str) -> Option<String> {
    property(object, key).as_string().filter(|text| !text.is_empty())
}

/// Copies the parts of `hass` the elements read.
///
/// With `entity` set, only that entity's state is copied; the editor passes
/// `None` to enumerate every bill source.
pub fn snapshot_from_hass(hass: &JsValue, entity: Option<&str>) -> HassSnapshot {
    let states = property(hass, "states");
    let states = match entity {
        Some(entity_id) => {
            let state = property(&states, entity_id);
            if state.is_undefined() || state.is_null() {
                Ok(Value::Object(Map::new()))
            } else {
                js_to_json(&state).map(|state| {
                    let mut map = Map::new();
                    map.insert(entity_id.to_string(), state);
                    Value::Object(map)
                })
            }
        }
        None => js_to_json(&states),
    };

    let states: BTreeMap<String, EntityState> = match states.map(serde_json::from_value) {
        Ok(Ok(states)) => states,
        Ok(Err(err)) => {
            log::warn!("unreadable entity states: {}", err);
            Default::default()
        }
        Err(err) => {
            log::warn!("could not copy entity states: {:?}", err);
            Default::default()
        }
    };

    let locale = property(hass, "locale");
    HassSnapshot {
        states,
        locale: LocaleSettings {
            language: string_property(&locale, "language"),
            currency: string_property(&locale, "currency")
                .or_else(|| string_property(&property(hass, "config"), "currency")),
        },
    }
}

/// Fires `config-changed` from the editor element, bubbling out of shadow roots.
pub fn dispatch_config_changed(target: &HtmlElement, changed: &ConfigChanged) -> Result<(), JsValue> {
    let detail = serde_json::to_value(changed).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&json_to_js(&detail)?);

    let event = CustomEvent::new_with_event_init_dict(CONFIG_CHANGED_EVENT, &init)?;
    target.dispatch_event(&event)?;
    Ok(())
}

/// Formats through the browser's `Intl.DateTimeFormat` and `Intl.NumberFormat`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntlFormatter;

impl LocaleFormatter for IntlFormatter {
    fn format_date(&self, date: NaiveDate, language: &str) -> Result<String, FormatError> {
        let options = options(&[("year", "numeric"), ("month", "short"), ("day", "numeric")]);
        let formatter = construct_intl("DateTimeFormat", language, &options)?;
        let date = js_sys::Date::new_with_year_month_day(
            date.year() as u32,
            date.month0() as i32,
            date.day() as i32,
        );
        call_format(&formatter, &date.into())
    }

    fn format_currency(&self, amount: f64, language: &str, currency: &str) -> Result<String, FormatError> {
        let options = options(&[("style", "currency"), ("currency", currency)]);
        let formatter = construct_intl("NumberFormat", language, &options)?;
        call_format(&formatter, &JsValue::from_f64(amount))
    }
}

fn options(pairs: &[(&str, &str)]) -> Object {
    let options = Object::new();
    for (key, value) in pairs {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    options
}

fn host_error(err: JsValue) -> FormatError {
    FormatError::Host(format!("{:?}", err))
}

/// `new Intl[name](language, options)`, with constructor exceptions caught.
fn construct_intl(name: &str, language: &str, options: &Object) -> Result<JsValue, FormatError> {
    let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl")).map_err(host_error)?;
    let constructor: Function = Reflect::get(&intl, &JsValue::from_str(name))
        .map_err(host_error)?
        .dyn_into()
        .map_err(host_error)?;
    Reflect::construct(&constructor, &Array::of2(&JsValue::from_str(language), options))
        .map_err(host_error)
}

fn call_format(formatter: &JsValue, value: &JsValue) -> Result<String, FormatError> {
    let format: Function = Reflect::get(formatter, &JsValue::from_str("format"))
        .map_err(host_error)?
        .dyn_into()
        .map_err(host_error)?;
    format
        .call1(formatter, value)
        .map_err(host_error)?
        .as_string()
        .ok_or_else(|| FormatError::Host("Intl format returned a non-string".to_string()))
}
