use dioxus::prelude::*;

use crate::{
    domain::{
        calculate, chargeable_weight, city_multiplier, AppState, CalculationInput, City,
        QuoteRequest, RateTable, DEFAULT_PACKAGING_USD, DEFAULT_RUB_PER_CNY,
        DEFAULT_TARIFF_USD_PER_KG, DEFAULT_USD_PER_RUB,
    },
    ui::{
        components::{
            kpi_card::KpiCard,
            quote_card::QuoteCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Field signals start from the last request so navigating away and back
    // keeps the form.
    let QuoteRequest {
        weight,
        volume,
        destination,
        rub_per_cny,
        usd_per_rub,
        tariff_per_kg,
        packaging_cost,
    } = state.with(|st| st.last_request.clone());
    let mut weight_input = use_signal(move || weight.clone());
    let mut volume_input = use_signal(move || volume.clone());
    let mut destination_input = use_signal(move || destination.clone());
    let mut rub_cny_input = use_signal(move || rub_per_cny.clone());
    let mut usd_rub_input = use_signal(move || usd_per_rub.clone());
    let mut tariff_input = use_signal(move || tariff_per_kg.clone());
    let mut packaging_input = use_signal(move || packaging_cost.clone());

    let rates = state.with(|st| st.rates);
    let quotes = state.with(|st| st.last_quotes);
    let resolved = state.with(|st| st.last_request.resolve());

    // The trigger stays disabled until weight, volume and destination are in.
    let can_calculate = !weight_input().trim().is_empty()
        && !volume_input().trim().is_empty()
        && !destination_input().trim().is_empty();

    let on_calculate = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let request = QuoteRequest {
                weight: weight_input(),
                volume: volume_input(),
                destination: destination_input(),
                rub_per_cny: rub_cny_input(),
                usd_per_rub: usd_rub_input(),
                tariff_per_kg: tariff_input(),
                packaging_cost: packaging_input(),
            };
            let Some(input) = request.resolve() else {
                push_toast(toasts.clone(), ToastKind::Warning, "Выберите город назначения.");
                return;
            };
            let quotes = calculate(&input, &state.with(|st| st.rates));
            state.with_mut(|st| {
                st.last_request = request;
                st.last_quotes = Some(quotes);
            });
        }
    };

    let on_clear = {
        let mut state = state.clone();
        move |_| {
            weight_input.set(String::new());
            volume_input.set(String::new());
            destination_input.set(String::new());
            rub_cny_input.set(String::new());
            usd_rub_input.set(String::new());
            tariff_input.set(String::new());
            packaging_input.set(String::new());
            state.with_mut(|st| st.clear_calculation());
        }
    };

    let rub_cny_hint = format!("{DEFAULT_RUB_PER_CNY:.2}");
    let usd_rub_hint = format!("{DEFAULT_USD_PER_RUB:.2}");
    let tariff_hint = format!("{DEFAULT_TARIFF_USD_PER_KG:.2}");
    let packaging_hint = format!("{DEFAULT_PACKAGING_USD:.2}");

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-6 md:grid-cols-2",
                div { class: "space-y-6",
                    section {
                        class: "{theme::PANEL} p-6",
                        h2 { class: "{theme::PANEL_TITLE}", "Параметры груза" }
                        div { class: "mt-4 space-y-4",
                            div {
                                label { class: "{theme::LABEL}", r#for: "weight", "Вес (кг)" }
                                input {
                                    id: "weight",
                                    class: "{theme::INPUT}",
                                    inputmode: "decimal",
                                    placeholder: "Введите вес груза",
                                    value: weight_input(),
                                    oninput: move |evt| weight_input.set(evt.value()),
                                }
                            }
                            div {
                                label { class: "{theme::LABEL}", r#for: "volume", "Объем (м³)" }
                                input {
                                    id: "volume",
                                    class: "{theme::INPUT}",
                                    inputmode: "decimal",
                                    placeholder: "Введите объем груза",
                                    value: volume_input(),
                                    oninput: move |evt| volume_input.set(evt.value()),
                                }
                            }
                            div {
                                label { class: "{theme::LABEL}", r#for: "destination", "Город назначения" }
                                select {
                                    id: "destination",
                                    class: "{theme::INPUT}",
                                    value: destination_input(),
                                    onchange: move |evt| destination_input.set(evt.value()),
                                    option {
                                        value: "",
                                        disabled: true,
                                        selected: destination_input().is_empty(),
                                        "Выберите город"
                                    }
                                    for city in City::ALL {
                                        option {
                                            value: city.name(),
                                            selected: destination_input() == city.name(),
                                            "{city.name()}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    section {
                        class: "{theme::PANEL} p-6",
                        h2 { class: "{theme::PANEL_TITLE}", "Валютные курсы и тарифы" }
                        p { class: "mt-1 text-xs {theme::TEXT_MUTED}",
                            "Пустые поля заменяются значениями по умолчанию."
                        }
                        div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                            div {
                                label { class: "{theme::LABEL}", r#for: "rub-cny", "Курс RUB/CNY" }
                                input {
                                    id: "rub-cny",
                                    class: "{theme::INPUT}",
                                    inputmode: "decimal",
                                    placeholder: rub_cny_hint,
                                    value: rub_cny_input(),
                                    oninput: move |evt| rub_cny_input.set(evt.value()),
                                }
                            }
                            div {
                                label { class: "{theme::LABEL}", r#for: "usd-rub", "Курс USD/RUB" }
                                input {
                                    id: "usd-rub",
                                    class: "{theme::INPUT}",
                                    inputmode: "decimal",
                                    placeholder: usd_rub_hint,
                                    value: usd_rub_input(),
                                    oninput: move |evt| usd_rub_input.set(evt.value()),
                                }
                            }
                            div {
                                label { class: "{theme::LABEL}", r#for: "tariff", "Тариф за кг ($)" }
                                input {
                                    id: "tariff",
                                    class: "{theme::INPUT}",
                                    inputmode: "decimal",
                                    placeholder: tariff_hint,
                                    value: tariff_input(),
                                    oninput: move |evt| tariff_input.set(evt.value()),
                                }
                            }
                            div {
                                label { class: "{theme::LABEL}", r#for: "packaging", "Стоимость упаковки ($)" }
                                input {
                                    id: "packaging",
                                    class: "{theme::INPUT}",
                                    inputmode: "decimal",
                                    placeholder: packaging_hint,
                                    value: packaging_input(),
                                    oninput: move |evt| packaging_input.set(evt.value()),
                                }
                            }
                        }
                    }

                    div { class: "flex gap-3",
                        button {
                            class: "{theme::BTN_PRIMARY} flex-1",
                            disabled: !can_calculate,
                            onclick: on_calculate,
                            "Рассчитать стоимость"
                        }
                        button {
                            class: "{theme::BTN_SECONDARY}",
                            onclick: on_clear,
                            "Очистить"
                        }
                    }
                }

                section {
                    class: "{theme::PANEL} p-6",
                    h2 { class: "{theme::PANEL_TITLE}", "Результаты расчета" }
                    match quotes {
                        Some(quotes) => rsx! {
                            div { class: "mt-4 space-y-3",
                                for quote in quotes {
                                    QuoteCard { quote }
                                }
                            }
                        },
                        None => rsx! {
                            div { class: "py-12 text-center {theme::TEXT_MUTED}",
                                p { class: "text-3xl", "🧮" }
                                p { class: "mt-3 text-sm", "Заполните данные для расчета" }
                            }
                        },
                    }
                }
            }

            if let (Some(input), Some(_)) = (resolved, quotes) {
                CalculationSummary { input, rates }
            }
        }
    }
}

/// Breakdown of the numbers behind the latest quotes: which weight was
/// charged, which rates applied, and the estimate disclaimer.
#[component]
fn CalculationSummary(input: CalculationInput, rates: RateTable) -> Element {
    let volumetric = input.volume_m3 * rates.volumetric_kg_per_m3;
    let chargeable = chargeable_weight(input.weight_kg, input.volume_m3, &rates);
    let multiplier = city_multiplier(input.destination, &rates);

    let currency_line = format!(
        "RUB/CNY {:.2}, USD/RUB {:.2}",
        input.rub_per_cny, input.usd_per_rub
    );
    let extras_line = format!(
        "тариф ${:.2}/кг, упаковка ${:.2}",
        input.tariff_usd_per_kg, input.packaging_usd
    );
    let surcharge_line = if input.destination.is_capital() {
        "Доставка в столицу без городской надбавки".to_string()
    } else {
        format!(
            "Надбавка за доставку в {}: ×{:.1}",
            input.destination.name(),
            multiplier
        )
    };

    rsx! {
        section {
            class: "space-y-4",
            div { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Фактический вес".to_string(),
                    value: format!("{:.1} кг", input.weight_kg),
                }
                KpiCard {
                    title: "Объемный вес".to_string(),
                    value: format!("{volumetric:.1} кг"),
                    description: Some(format!(
                        "{:.1} м³ × {:.0} кг/м³",
                        input.volume_m3, rates.volumetric_kg_per_m3
                    )),
                }
                KpiCard {
                    title: "Расчетный вес".to_string(),
                    value: format!("{chargeable:.1} кг"),
                    description: Some("Максимум из фактического и объемного".to_string()),
                }
            }
            div {
                class: "rounded-xl border border-amber-500/30 bg-amber-500/5 p-6 text-sm text-slate-300",
                p {
                    strong { "Валютные курсы: " }
                    "{currency_line}"
                }
                p { class: "mt-2",
                    strong { "Дополнительные расходы: " }
                    "{extras_line}"
                }
                p { class: "mt-2", "{surcharge_line}" }
                p { class: "mt-2 text-xs {theme::TEXT_MUTED}",
                    "Указанные цены являются ориентировочными. Финальная стоимость может отличаться в зависимости от типа груза и дополнительных услуг."
                }
            }
        }
    }
}
