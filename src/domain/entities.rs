use serde::{Deserialize, Serialize};

/// Destination cities offered by the calculator. The set is closed: quotes
/// are only defined for cities the surcharge model knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Moscow,
    SaintPetersburg,
    Novosibirsk,
    Yekaterinburg,
    Kazan,
    NizhnyNovgorod,
    Chelyabinsk,
    Samara,
}

impl City {
    pub const ALL: [City; 8] = [
        City::Moscow,
        City::SaintPetersburg,
        City::Novosibirsk,
        City::Yekaterinburg,
        City::Kazan,
        City::NizhnyNovgorod,
        City::Chelyabinsk,
        City::Samara,
    ];

    /// Display name, exactly as it appears in the destination selector.
    pub fn name(&self) -> &'static str {
        match self {
            City::Moscow => "Москва",
            City::SaintPetersburg => "Санкт-Петербург",
            City::Novosibirsk => "Новосибирск",
            City::Yekaterinburg => "Екатеринбург",
            City::Kazan => "Казань",
            City::NizhnyNovgorod => "Нижний Новгород",
            City::Chelyabinsk => "Челябинск",
            City::Samara => "Самара",
        }
    }

    pub fn from_name(name: &str) -> Option<City> {
        City::ALL.iter().copied().find(|city| city.name() == name)
    }

    /// Freight terminates in Moscow; every other destination pays the
    /// inland surcharge.
    pub fn is_capital(&self) -> bool {
        matches!(self, City::Moscow)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    Sea,
    Rail,
    Air,
}

impl ShippingMethod {
    /// Quote order is fixed: sea, rail, air.
    pub const ALL: [ShippingMethod; 3] =
        [ShippingMethod::Sea, ShippingMethod::Rail, ShippingMethod::Air];

    pub fn label(&self) -> &'static str {
        match self {
            ShippingMethod::Sea => "Морская доставка",
            ShippingMethod::Rail => "Железная дорога",
            ShippingMethod::Air => "Авиадоставка",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ShippingMethod::Sea => "🚢",
            ShippingMethod::Rail => "🚆",
            ShippingMethod::Air => "✈️",
        }
    }

    pub fn transit_time(&self) -> &'static str {
        match self {
            ShippingMethod::Sea => "25-35 дней",
            ShippingMethod::Rail => "15-20 дней",
            ShippingMethod::Air => "5-7 дней",
        }
    }
}

/// Raw form fields, exactly as typed. Resolution into numbers (including the
/// parse-or-default fallbacks) happens in [`crate::domain::quote`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteRequest {
    pub weight: String,
    pub volume: String,
    pub destination: String,
    pub rub_per_cny: String,
    pub usd_per_rub: String,
    pub tariff_per_kg: String,
    pub packaging_cost: String,
}

impl QuoteRequest {
    /// The calculate trigger stays disabled until this holds.
    pub fn is_complete(&self) -> bool {
        !self.weight.trim().is_empty()
            && !self.volume.trim().is_empty()
            && !self.destination.trim().is_empty()
    }
}

/// Fully resolved calculator inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationInput {
    pub weight_kg: f64,
    pub volume_m3: f64,
    pub destination: City,
    /// Accepted for interface compatibility and shown in the calculation
    /// summary; not part of the price formula.
    pub rub_per_cny: f64,
    pub usd_per_rub: f64,
    pub tariff_usd_per_kg: f64,
    pub packaging_usd: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShippingQuote {
    pub method: ShippingMethod,
    /// Rounded once, in rubles.
    pub price_rub: i64,
    pub transit_time: &'static str,
}

/// Freight constants behind the price formula. Editable on the settings page
/// and persisted, so the shipped numbers can be adjusted without a rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// USD per chargeable kilogram, by method.
    pub sea_rate: f64,
    pub rail_rate: f64,
    pub air_rate: f64,
    /// Kilograms of volumetric weight per cubic metre of cargo.
    pub volumetric_kg_per_m3: f64,
    /// Flat surcharge factor for every destination except the capital.
    pub non_capital_multiplier: f64,
}

impl RateTable {
    pub fn base_rate(&self, method: ShippingMethod) -> f64 {
        match method {
            ShippingMethod::Sea => self.sea_rate,
            ShippingMethod::Rail => self.rail_rate,
            ShippingMethod::Air => self.air_rate,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            sea_rate: 2.5,
            rail_rate: 4.2,
            air_rate: 8.5,
            volumetric_kg_per_m3: 200.0,
            non_capital_multiplier: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_names_round_trip() {
        for city in City::ALL {
            assert_eq!(City::from_name(city.name()), Some(city));
        }
        assert_eq!(City::from_name("Владивосток"), None);
        assert_eq!(City::from_name(""), None);
    }

    #[test]
    fn only_moscow_is_capital() {
        let capitals: Vec<_> = City::ALL.iter().filter(|city| city.is_capital()).collect();
        assert_eq!(capitals, vec![&City::Moscow]);
    }

    #[test]
    fn method_order_is_sea_rail_air() {
        assert_eq!(
            ShippingMethod::ALL,
            [ShippingMethod::Sea, ShippingMethod::Rail, ShippingMethod::Air]
        );
    }

    #[test]
    fn transit_times_are_fixed_per_method() {
        assert_eq!(ShippingMethod::Sea.transit_time(), "25-35 дней");
        assert_eq!(ShippingMethod::Rail.transit_time(), "15-20 дней");
        assert_eq!(ShippingMethod::Air.transit_time(), "5-7 дней");
    }

    #[test]
    fn request_completeness_gates_on_weight_volume_destination() {
        let mut request = QuoteRequest::default();
        assert!(!request.is_complete());

        request.weight = "100".into();
        request.volume = "0.5".into();
        assert!(!request.is_complete());

        request.destination = "Казань".into();
        assert!(request.is_complete());

        request.volume = "   ".into();
        assert!(!request.is_complete());
    }

    #[test]
    fn default_rate_table_carries_shipped_constants() {
        let rates = RateTable::default();
        assert_eq!(rates.base_rate(ShippingMethod::Sea), 2.5);
        assert_eq!(rates.base_rate(ShippingMethod::Rail), 4.2);
        assert_eq!(rates.base_rate(ShippingMethod::Air), 8.5);
        assert_eq!(rates.volumetric_kg_per_m3, 200.0);
        assert_eq!(rates.non_capital_multiplier, 1.2);
    }
}
