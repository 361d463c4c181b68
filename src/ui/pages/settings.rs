use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, RateTable},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version,
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.rates);
    let mut sea_input = use_signal(move || format!("{:.1}", initial.sea_rate));
    let mut rail_input = use_signal(move || format!("{:.1}", initial.rail_rate));
    let mut air_input = use_signal(move || format!("{:.1}", initial.air_rate));
    let mut volumetric_input = use_signal(move || format!("{:.0}", initial.volumetric_kg_per_m3));
    let mut multiplier_input = use_signal(move || format!("{:.2}", initial.non_capital_multiplier));

    let update_status = use_signal(|| None::<String>);

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let parsed = parse_rates(
                sea_input(),
                rail_input(),
                air_input(),
                volumetric_input(),
                multiplier_input(),
            );

            match parsed {
                Ok(rates) => {
                    state.with_mut(|st| st.rates = rates);
                    persist_user_state(&state);
                    push_toast(toasts.clone(), ToastKind::Success, "Тарифы обновлены.");
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = RateTable::default();
            sea_input.set(format!("{:.1}", defaults.sea_rate));
            rail_input.set(format!("{:.1}", defaults.rail_rate));
            air_input.set(format!("{:.1}", defaults.air_rate));
            volumetric_input.set(format!("{:.0}", defaults.volumetric_kg_per_m3));
            multiplier_input.set(format!("{:.2}", defaults.non_capital_multiplier));
            state.with_mut(|st| st.rates = defaults);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Восстановлены тарифы по умолчанию.",
            );
        }
    };

    let on_check_update = {
        let toasts = toasts.clone();
        move |_| {
            let toasts = toasts.clone();
            let mut update_status = update_status.clone();
            spawn(async move {
                update_status.set(Some("Проверяем обновления...".to_string()));
                match version::check_for_update().await {
                    Ok(info) => update_status.set(Some(info.to_string())),
                    Err(err) => {
                        update_status.set(None);
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Не удалось проверить обновления: {err}"),
                        );
                    }
                }
            });
        }
    };

    let version_label = version::version_label();
    let status_line = update_status();

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::PANEL} p-6",
                h2 { class: "{theme::PANEL_TITLE}", "Базовые тарифы" }
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}",
                    "Стоимость за расчетный килограмм ($), объемный коэффициент и городская надбавка."
                }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "{theme::LABEL}", "Морская доставка ($/кг)" }
                        input {
                            class: "{theme::INPUT}",
                            value: sea_input(),
                            oninput: move |evt| sea_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Железная дорога ($/кг)" }
                        input {
                            class: "{theme::INPUT}",
                            value: rail_input(),
                            oninput: move |evt| rail_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Авиадоставка ($/кг)" }
                        input {
                            class: "{theme::INPUT}",
                            value: air_input(),
                            oninput: move |evt| air_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Объемный вес (кг/м³)" }
                        input {
                            class: "{theme::INPUT}",
                            value: volumetric_input(),
                            oninput: move |evt| volumetric_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::LABEL}", "Надбавка вне Москвы (множитель)" }
                        input {
                            class: "{theme::INPUT}",
                            value: multiplier_input(),
                            oninput: move |evt| multiplier_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::BTN_PRIMARY}", onclick: on_apply, "Применить" }
                    button { class: "{theme::BTN_SECONDARY}", onclick: on_reset, "Сбросить" }
                }
            }

            section {
                class: "{theme::PANEL} p-6",
                h2 { class: "{theme::PANEL_TITLE}", "О программе" }
                p { class: "mt-3 text-sm text-slate-300", "{version::APP_NAME} {version_label}" }
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}",
                    a {
                        href: version::APP_REPO_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        class: "hover:text-slate-300",
                        "{version::APP_REPO_URL}"
                    }
                }
                div { class: "mt-4 flex items-center gap-3",
                    button { class: "{theme::BTN_SECONDARY}", onclick: on_check_update, "Проверить обновления" }
                    if let Some(status) = status_line {
                        span { class: "text-xs {theme::TEXT_MUTED}", "{status}" }
                    }
                }
            }
        }
    }
}

fn parse_rates(
    sea: String,
    rail: String,
    air: String,
    volumetric: String,
    multiplier: String,
) -> Result<RateTable, String> {
    let sea = parse_positive(&sea, "Тариф морской доставки")?;
    let rail = parse_positive(&rail, "Тариф железной дороги")?;
    let air = parse_positive(&air, "Тариф авиадоставки")?;
    let volumetric = parse_positive(&volumetric, "Объемный коэффициент")?;

    let multiplier: f64 = multiplier
        .trim()
        .parse()
        .map_err(|_| "Городская надбавка должна быть числом".to_string())?;
    if !multiplier.is_finite() || multiplier < 1.0 {
        return Err("Городская надбавка не может быть меньше 1".to_string());
    }

    Ok(RateTable {
        sea_rate: sea,
        rail_rate: rail,
        air_rate: air,
        volumetric_kg_per_m3: volumetric,
        non_capital_multiplier: multiplier,
    })
}

fn parse_positive(input: &str, label: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("{label}: введите число"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{label}: значение должно быть больше нуля"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(
        sea: &str,
        rail: &str,
        air: &str,
        volumetric: &str,
        multiplier: &str,
    ) -> Result<RateTable, String> {
        parse_rates(
            sea.to_string(),
            rail.to_string(),
            air.to_string(),
            volumetric.to_string(),
            multiplier.to_string(),
        )
    }

    #[test]
    fn default_values_pass_validation() {
        let rates = fields("2.5", "4.2", "8.5", "200", "1.20").unwrap();
        assert_eq!(rates, RateTable::default());
    }

    #[test]
    fn rates_must_be_positive_numbers() {
        assert!(fields("0", "4.2", "8.5", "200", "1.2").is_err());
        assert!(fields("-2.5", "4.2", "8.5", "200", "1.2").is_err());
        assert!(fields("дешево", "4.2", "8.5", "200", "1.2").is_err());
        assert!(fields("2.5", "4.2", "8.5", "", "1.2").is_err());
    }

    #[test]
    fn multiplier_below_one_is_rejected() {
        assert!(fields("2.5", "4.2", "8.5", "200", "0.9").is_err());
        assert!(fields("2.5", "4.2", "8.5", "200", "1.0").is_ok());
    }
}
