//! Ledgerscope Market Data Crate
//!
//! Price oracle access for the explorer client. Dashboards need a fiat price
//! for the external assets a ledger bridges to (BTC, ETH), and this crate is
//! the only place that talks to an oracle for it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |  Explorer crate  | --> |    PriceProvider     |  (trait)
//! +------------------+     +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          | ExchangeRatesProvider|  (GET /exchange-rates)
//!                          +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          |        Quote         |  (Decimal USD price)
//!                          +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceProvider`] - Oracle abstraction
//! - [`ExchangeRatesProvider`] - Default oracle implementation
//! - [`Quote`] - A single fiat price observation
//! - [`MarketDataError`] / [`RetryClass`] - Errors and their retry policy

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{MarketDataError, RetryClass};
pub use models::{Currency, Quote};
pub use provider::exchange_rates::ExchangeRatesProvider;
pub use provider::PriceProvider;
