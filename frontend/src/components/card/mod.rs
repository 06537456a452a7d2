//! Bill card: renders the selected bills of one sensor entity.
//!
//! The component holds no state of its own. Every render rebuilds the
//! presentation tree from the current props through `common::view`, so a
//! config replacement or a new `hass` snapshot is just a props update.

use yew::prelude::*;

mod props;
mod view;

pub use props::BillCardProps;

pub struct BillCard;

impl Component for BillCard {
    type Message = ();
    type Properties = BillCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BillCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(ctx)
    }
}
