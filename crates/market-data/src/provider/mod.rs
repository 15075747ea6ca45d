//! Price oracle abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` trait that all oracles implement
//! - The exchange-rates oracle used by default

mod traits;

pub mod exchange_rates;

pub use traits::PriceProvider;
