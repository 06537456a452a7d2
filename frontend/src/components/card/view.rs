//! Markup for the bill card.

use yew::prelude::*;

use common::view::{build_card_view, BillView, CardBody, FieldRow, StatusBadge};

use super::BillCard;
use crate::host::IntlFormatter;

pub fn view(ctx: &Context<BillCard>) -> Html {
    let props = ctx.props();
    let card = build_card_view(&props.config, &props.snapshot, &IntlFormatter);

    html! {
        <ha-card class="uet-card" header={card.title.clone()}>
            { build_body(&card.body) }
        </ha-card>
    }
}

fn build_body(body: &CardBody) -> Html {
    match body {
        CardBody::EntityNotFound { entity } => html! {
            <div class="uet-empty">{ format!("Entity {} not found", entity) }</div>
        },
        CardBody::NoBills => html! {
            <div class="uet-wrapper">
                <div class="uet-empty">{ "No bills available" }</div>
            </div>
        },
        CardBody::Bills(bills) => html! {
            <div class="uet-wrapper">
                { for bills.iter().map(build_bill) }
            </div>
        },
    }
}

fn build_bill(bill: &BillView) -> Html {
    html! {
        <div class="uet-bill">
            <div class="uet-bill-header">
                <div class="uet-bill-provider">{ bill.provider.clone() }</div>
                { build_status(bill.status.as_ref()) }
            </div>
            <div class="uet-data">
                { for bill.rows.iter().map(build_row) }
            </div>
            if !bill.details.is_empty() {
                <div class="uet-data uet-details">
                    { for bill.details.iter().map(build_row) }
                </div>
            }
        </div>
    }
}

fn build_status(status: Option<&StatusBadge>) -> Html {
    match status {
        Some(badge) => html! {
            <div class={classes!("uet-status", badge.overdue.then_some("overdue"))}>
                { badge.text.clone() }
            </div>
        },
        None => html! {},
    }
}

fn build_row(row: &FieldRow) -> Html {
    html! {
        <div>
            <div class="uet-label">{ row.label }</div>
            <div class="uet-value">{ row.value.clone() }</div>
        </div>
    }
}
