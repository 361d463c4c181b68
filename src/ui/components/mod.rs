pub mod kpi_card;
pub mod quote_card;
pub mod toast;
