use dioxus::prelude::*;

use crate::domain::ShippingQuote;
use crate::ui::theme;
use crate::util::format_rub;

/// One row of the results panel: method icon, label, transit range, price.
#[component]
pub fn QuoteCard(quote: ShippingQuote) -> Element {
    let icon = quote.method.icon();
    let label = quote.method.label();
    let price = format_rub(quote.price_rub);

    rsx! {
        div {
            class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 px-4 py-4 transition hover:bg-slate-900",
            div { class: "flex items-center gap-3",
                span { class: "text-2xl", "{icon}" }
                div {
                    div { class: "font-medium text-slate-100", "{label}" }
                    div { class: "text-sm {theme::TEXT_MUTED}", "{quote.transit_time}" }
                }
            }
            div { class: "text-lg font-bold {theme::ACCENT}", "{price}" }
        }
    }
}
