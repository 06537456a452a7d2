//! Card editor: the form the host shows when a user configures the card.
//!
//! Follows an Elm-style split:
//! - `state`: the working config (`common::editor::EditorState`).
//! - `update`: applies a `Msg` and pushes the resulting config to the host.
//! - `view`: renders the form controls from the working config.
//!
//! The host answers every `config-changed` event by calling `setConfig`
//! again, which arrives here as new props and resets the working config.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CardEditorProps;
pub use state::CardEditor;

impl Component for CardEditor {
    type Message = Msg;
    type Properties = CardEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        CardEditor::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.reset(&ctx.props().config);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
