/// Classification for retry policy.
///
/// Nothing in this workspace retries on its own. The class is a hint for the
/// caller (or an HTTP transport wrapper) deciding whether another attempt
/// could succeed.
///
/// | Class | Retry? |
/// |-------|--------|
/// | `Never` | No, the request itself is wrong |
/// | `WithBackoff` | Yes, after a delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Bad input, validation error, or a response that will not change.
    Never,

    /// Transient failure: rate limiting, timeouts, connection errors, 5xx.
    WithBackoff,
}
