use std::borrow::Cow;

/// Currency code (ISO 4217 or a ticker such as "BTC") - mostly static
pub type Currency = Cow<'static, str>;
