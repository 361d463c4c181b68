//! Domain logic for freight pricing lives here.

pub mod app_state;
pub mod entities;
pub mod quote;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use entities::{
    CalculationInput, City, QuoteRequest, RateTable, ShippingMethod, ShippingQuote,
};
#[allow(unused_imports)]
pub use quote::{
    calculate, chargeable_weight, city_multiplier, DEFAULT_PACKAGING_USD, DEFAULT_RUB_PER_CNY,
    DEFAULT_TARIFF_USD_PER_KG, DEFAULT_USD_PER_RUB,
};
