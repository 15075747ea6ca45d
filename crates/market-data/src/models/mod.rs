//! Market data models
//!
//! - `types` - Currency code alias (Currency)
//! - `quote` - Price observation returned by oracles (Quote)

mod quote;
mod types;

pub use quote::Quote;
pub use types::Currency;
