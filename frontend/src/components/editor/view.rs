//! Form markup for the card editor.

use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::editor::{entity_options, EntityOption, KEY_BILL_INDEX, KEY_ENTITY, KEY_PROVIDER, KEY_TITLE};
use common::model::config::FieldKey;

use super::messages::Msg;
use super::state::CardEditor;

pub fn view(component: &CardEditor, ctx: &Context<CardEditor>) -> Html {
    let link = ctx.link();

    html! {
        <div class="uet-editor">
            { build_entity_field(component, ctx) }
            { build_text_field(
                "Title",
                None,
                "Title (optional)",
                component.state.text(KEY_TITLE),
                link.callback(|e: InputEvent| Msg::SetTitle(input_value(&e))),
            ) }
            { build_text_field(
                "Provider Filter",
                Some("Match by provider name (optional)."),
                "Provider",
                component.state.text(KEY_PROVIDER),
                link.callback(|e: InputEvent| Msg::SetProvider(input_value(&e))),
            ) }
            { build_bill_index_field(component, link) }
            { build_fields_field(component, link) }
        </div>
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Sensor picker. The configured entity stays selectable even when it no
/// longer exposes bills.
fn build_entity_field(component: &CardEditor, ctx: &Context<CardEditor>) -> Html {
    let current = component.state.text(KEY_ENTITY);
    let mut options = entity_options(&ctx.props().snapshot);
    if !current.is_empty() && !options.iter().any(|option| option.value == current) {
        options.insert(
            0,
            EntityOption {
                value: current.clone(),
                label: current.clone(),
            },
        );
    }

    let onchange = ctx.link().callback(|e: Event| {
        Msg::SetEntity(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="uet-field">
            <div class="uet-label">{ "Entity" }</div>
            <div class="uet-description">{ "Select the Utilities Email Tracker sensor." }</div>
            <select class="entity" {onchange}>
                <option value="" selected={current.is_empty()}>{ "Select a sensor" }</option>
                { for options.iter().map(|option| html! {
                    <option value={option.value.clone()} selected={option.value == current}>
                        { option.label.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn build_text_field(
    label: &'static str,
    description: Option<&'static str>,
    placeholder: &'static str,
    value: String,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="uet-field">
            <div class="uet-label">{ label }</div>
            if let Some(description) = description {
                <div class="uet-description">{ description }</div>
            }
            <input type="text" {placeholder} {value} {oninput} />
        </div>
    }
}

fn build_bill_index_field(component: &CardEditor, link: &Scope<CardEditor>) -> Html {
    html! {
        <div class="uet-field">
            <div class="uet-label">{ "Bill Index" }</div>
            <div class="uet-description">
                { "Select a specific bill (0 = newest). Leave blank to show all." }
            </div>
            <input
                class="bill-index"
                type="number"
                min="0"
                placeholder="Bill index"
                value={component.state.text(KEY_BILL_INDEX)}
                oninput={link.callback(|e: InputEvent| Msg::SetBillIndex(input_value(&e)))}
            />
        </div>
    }
}

fn build_fields_field(component: &CardEditor, link: &Scope<CardEditor>) -> Html {
    let selected = component.state.selected_fields();

    html! {
        <div class="uet-field">
            <div class="uet-label">{ "Fields" }</div>
            <div class="uet-description">{ "Bill details to show. Clear all to use the defaults." }</div>
            <div class="uet-checkboxes">
                { for FieldKey::DEFAULT.into_iter().map(|key| html! {
                    <label class="uet-checkbox">
                        <input
                            type="checkbox"
                            checked={selected.contains(&key)}
                            onchange={link.callback(move |e: Event| {
                                Msg::ToggleField(key, e.target_unchecked_into::<HtmlInputElement>().checked())
                            })}
                        />
                        { key.label() }
                    </label>
                }) }
            </div>
        </div>
    }
}
