use yew::prelude::*;

use common::editor::{KEY_ENTITY, KEY_PROVIDER, KEY_TITLE};

use super::messages::Msg;
use super::state::CardEditor;

/// Applies one form edit and emits the updated config upward.
///
/// Always re-renders: the form mirrors the working config, which changed.
pub fn update(component: &mut CardEditor, ctx: &Context<CardEditor>, msg: Msg) -> bool {
    let changed = match msg {
        Msg::SetEntity(entity) => component.state.set_text(KEY_ENTITY, &entity),
        Msg::SetTitle(title) => component.state.set_text(KEY_TITLE, &title),
        Msg::SetProvider(provider) => component.state.set_text(KEY_PROVIDER, &provider),
        Msg::SetBillIndex(raw) => component.state.set_bill_index_input(&raw),
        Msg::ToggleField(key, checked) => component.state.toggle_field(key, checked),
    };

    ctx.props().on_config_changed.emit(changed);
    true
}
