use super::entities::{
    CalculationInput, City, QuoteRequest, RateTable, ShippingMethod, ShippingQuote,
};

/// Fallbacks applied when a rate field is left blank or does not parse.
/// Weight and volume fall back to zero instead.
pub const DEFAULT_RUB_PER_CNY: f64 = 13.5;
pub const DEFAULT_USD_PER_RUB: f64 = 95.0;
pub const DEFAULT_TARIFF_USD_PER_KG: f64 = 3.0;
pub const DEFAULT_PACKAGING_USD: f64 = 10.0;

/// Parse-or-default: malformed input degrades to `default`, never to an
/// error. This is a documented contract of the calculator, not a validation
/// layer.
fn parse_or(field: &str, default: f64) -> f64 {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

impl QuoteRequest {
    /// Resolves the raw form fields into calculator inputs. `None` only when
    /// the destination names no known city; the select widget keeps that
    /// from happening in the running app.
    pub fn resolve(&self) -> Option<CalculationInput> {
        let destination = City::from_name(self.destination.trim())?;
        Some(CalculationInput {
            weight_kg: parse_or(&self.weight, 0.0),
            volume_m3: parse_or(&self.volume, 0.0),
            destination,
            rub_per_cny: parse_or(&self.rub_per_cny, DEFAULT_RUB_PER_CNY),
            usd_per_rub: parse_or(&self.usd_per_rub, DEFAULT_USD_PER_RUB),
            tariff_usd_per_kg: parse_or(&self.tariff_per_kg, DEFAULT_TARIFF_USD_PER_KG),
            packaging_usd: parse_or(&self.packaging_cost, DEFAULT_PACKAGING_USD),
        })
    }
}

/// The greater of actual and volumetric weight, the standard freight
/// convention for space-intensive cargo.
pub fn chargeable_weight(weight_kg: f64, volume_m3: f64, rates: &RateTable) -> f64 {
    weight_kg.max(volume_m3 * rates.volumetric_kg_per_m3)
}

pub fn city_multiplier(city: City, rates: &RateTable) -> f64 {
    if city.is_capital() {
        1.0
    } else {
        rates.non_capital_multiplier
    }
}

/// Prices all three shipping methods for one resolved request.
///
/// Deterministic, no side effects, never fails; quotes always come back in
/// the same order: sea, rail, air. Rounding happens once, on the final
/// ruble value of each quote.
pub fn calculate(input: &CalculationInput, rates: &RateTable) -> [ShippingQuote; 3] {
    let chargeable = chargeable_weight(input.weight_kg, input.volume_m3, rates);
    let multiplier = city_multiplier(input.destination, rates);

    ShippingMethod::ALL.map(|method| {
        let freight_usd = chargeable * rates.base_rate(method) * multiplier;
        let tariff_usd = chargeable * input.tariff_usd_per_kg;
        let total_rub = (freight_usd + tariff_usd + input.packaging_usd) * input.usd_per_rub;
        ShippingQuote {
            method,
            price_rub: total_rub.round() as i64,
            transit_time: method.transit_time(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(weight: &str, volume: &str, destination: &str) -> QuoteRequest {
        QuoteRequest {
            weight: weight.to_string(),
            volume: volume.to_string(),
            destination: destination.to_string(),
            ..QuoteRequest::default()
        }
    }

    fn prices(quotes: &[ShippingQuote; 3]) -> [i64; 3] {
        [quotes[0].price_rub, quotes[1].price_rub, quotes[2].price_rub]
    }

    #[test]
    fn three_quotes_in_fixed_order() {
        let input = request("100", "0.1", "Москва").resolve().unwrap();
        let quotes = calculate(&input, &RateTable::default());
        let methods: Vec<_> = quotes.iter().map(|quote| quote.method).collect();
        assert_eq!(
            methods,
            vec![ShippingMethod::Sea, ShippingMethod::Rail, ShippingMethod::Air]
        );
    }

    #[test]
    fn identical_input_yields_identical_quotes() {
        let input = request("42", "0.7", "Самара").resolve().unwrap();
        let rates = RateTable::default();
        assert_eq!(calculate(&input, &rates), calculate(&input, &rates));
    }

    #[test]
    fn actual_weight_wins_when_heavier_than_volumetric() {
        let rates = RateTable::default();
        // 0.1 m³ -> 20 kg volumetric, actual 100 kg dominates.
        assert_eq!(chargeable_weight(100.0, 0.1, &rates), 100.0);
        // 1 m³ -> 200 kg volumetric dominates 10 kg actual.
        assert_eq!(chargeable_weight(10.0, 1.0, &rates), 200.0);
    }

    #[test]
    fn worked_example_moscow_all_defaults() {
        // 100 kg, 0.1 m³, capital, default rates: chargeable weight is 100.
        let input = request("100", "0.1", "Москва").resolve().unwrap();
        let quotes = calculate(&input, &RateTable::default());
        // (100*2.5 + 100*3 + 10) * 95, (100*4.2 + 310) * 95, (100*8.5 + 310) * 95
        assert_eq!(prices(&quotes), [53_200, 69_350, 110_200]);
    }

    #[test]
    fn non_capital_destination_pays_the_surcharge() {
        let moscow = request("100", "0.1", "Москва").resolve().unwrap();
        let novosibirsk = request("100", "0.1", "Новосибирск").resolve().unwrap();
        let rates = RateTable::default();

        assert_eq!(city_multiplier(moscow.destination, &rates), 1.0);
        assert_eq!(city_multiplier(novosibirsk.destination, &rates), 1.2);

        // Only the freight term is multiplied; tariff and packaging are not.
        let quotes = calculate(&novosibirsk, &rates);
        assert_eq!(prices(&quotes), [57_950, 77_330, 126_350]);
        assert_ne!(prices(&quotes), prices(&calculate(&moscow, &rates)));
    }

    #[test]
    fn blank_rate_fields_fall_back_to_defaults() {
        let blank = request("100", "0.1", "Москва").resolve().unwrap();
        let explicit = QuoteRequest {
            rub_per_cny: "13.5".into(),
            usd_per_rub: "95".into(),
            tariff_per_kg: "3".into(),
            packaging_cost: "10".into(),
            ..request("100", "0.1", "Москва")
        }
        .resolve()
        .unwrap();

        assert_eq!(blank, explicit);
        assert_eq!(blank.usd_per_rub, DEFAULT_USD_PER_RUB);
        assert_eq!(blank.tariff_usd_per_kg, DEFAULT_TARIFF_USD_PER_KG);
        assert_eq!(blank.packaging_usd, DEFAULT_PACKAGING_USD);
        assert_eq!(blank.rub_per_cny, DEFAULT_RUB_PER_CNY);
    }

    #[test]
    fn garbage_numeric_text_degrades_to_defaults() {
        let garbled = QuoteRequest {
            tariff_per_kg: "дорого".into(),
            packaging_cost: "n/a".into(),
            ..request("100", "0.1", "Москва")
        }
        .resolve()
        .unwrap();
        let defaulted = request("100", "0.1", "Москва").resolve().unwrap();
        assert_eq!(garbled, defaulted);
    }

    #[test]
    fn rub_cny_rate_never_affects_any_price() {
        let rates = RateTable::default();
        let base = request("250", "1.5", "Казань").resolve().unwrap();
        for value in ["", "0", "13.5", "99.9", "не число"] {
            let varied = QuoteRequest {
                rub_per_cny: value.into(),
                ..request("250", "1.5", "Казань")
            }
            .resolve()
            .unwrap();
            assert_eq!(calculate(&varied, &rates), calculate(&base, &rates));
        }
    }

    #[test]
    fn blank_weight_and_volume_resolve_to_zero() {
        let input = request("", "", "Москва").resolve().unwrap();
        assert_eq!(input.weight_kg, 0.0);
        assert_eq!(input.volume_m3, 0.0);

        // Zero chargeable weight leaves only packaging to convert.
        let quotes = calculate(&input, &RateTable::default());
        assert_eq!(prices(&quotes), [950, 950, 950]);
    }

    #[test]
    fn unknown_destination_does_not_resolve() {
        assert!(request("100", "0.1", "Пекин").resolve().is_none());
        assert!(request("100", "0.1", "").resolve().is_none());
    }

    #[test]
    fn custom_rate_table_flows_through_the_formula() {
        let rates = RateTable {
            sea_rate: 3.0,
            rail_rate: 5.0,
            air_rate: 10.0,
            volumetric_kg_per_m3: 250.0,
            non_capital_multiplier: 1.5,
        };
        // 0.5 m³ -> 125 kg volumetric dominates 50 kg actual.
        let input = request("50", "0.5", "Самара").resolve().unwrap();
        let quotes = calculate(&input, &rates);
        // (125*rate*1.5 + 125*3 + 10) * 95 per method.
        assert_eq!(prices(&quotes), [90_013, 125_638, 214_700]);
    }
}
