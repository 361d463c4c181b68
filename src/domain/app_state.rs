use serde::{Deserialize, Serialize};

use super::entities::{QuoteRequest, RateTable, ShippingQuote};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Freight constants; editable on the settings page.
    pub rates: RateTable,
    /// Latest form snapshot, so navigating away and back keeps the fields.
    pub last_request: QuoteRequest,
    /// Latest quotes, replaced wholesale on every calculation and discarded
    /// when the form is cleared. Never written to disk.
    pub last_quotes: Option<[ShippingQuote; 3]>,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.rates = persisted.rates;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState { rates: self.rates }
    }

    pub fn clear_calculation(&mut self) {
        self.last_request = QuoteRequest::default();
        self.last_quotes = None;
    }
}

/// On-disk form of the user's settings. Only configuration is persisted;
/// requests and quotes are transient by contract.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub rates: RateTable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::calculate;

    #[test]
    fn persisted_state_round_trips_through_json() {
        let state = PersistedState {
            rates: RateTable {
                sea_rate: 2.8,
                rail_rate: 4.0,
                air_rate: 9.0,
                volumetric_kg_per_m3: 167.0,
                non_capital_multiplier: 1.25,
            },
        };
        let json = serde_json::to_string_pretty(&state).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.rates, state.rates);
    }

    #[test]
    fn missing_rates_field_falls_back_to_defaults() {
        let restored: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.rates, RateTable::default());
    }

    #[test]
    fn clear_calculation_drops_request_and_quotes() {
        let mut state = AppState::default();
        state.last_request = QuoteRequest {
            weight: "100".into(),
            volume: "0.1".into(),
            destination: "Москва".into(),
            ..QuoteRequest::default()
        };
        let input = state.last_request.resolve().unwrap();
        state.last_quotes = Some(calculate(&input, &state.rates));

        state.clear_calculation();
        assert_eq!(state.last_request, QuoteRequest::default());
        assert!(state.last_quotes.is_none());
    }

    #[test]
    fn persisting_keeps_rates_and_nothing_else() {
        let mut state = AppState::default();
        state.rates.sea_rate = 3.1;
        state.last_request.weight = "55".into();

        let persisted = state.to_persisted();
        let mut restored = AppState::default();
        restored.apply_persisted(persisted);

        assert_eq!(restored.rates.sea_rate, 3.1);
        assert!(restored.last_request.weight.is_empty());
        assert!(restored.last_quotes.is_none());
    }
}
