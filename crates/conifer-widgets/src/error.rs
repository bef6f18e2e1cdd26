//! Widget error taxonomy
//!
//! Three failure classes, plus structural DOM failures surfaced verbatim:
//! - `Configuration`: a required option is missing or malformed; callers
//!   log it and continue in a degraded no-op mode.
//! - `Structure`: the expected markup shape is absent; binding for that
//!   widget instance aborts, other widgets are unaffected.
//! - `Precondition`: an operation was invoked in an invalid state; the call
//!   is rejected without corrupting any bookkeeping.

use conifer_dom::DomError;
use thiserror::Error;

/// Result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Widget errors
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("missing or invalid configuration: {0}")]
    Configuration(&'static str),

    #[error("expected markup structure missing: {0}")]
    Structure(String),

    #[error("{0} is invalid in the current state")]
    Precondition(&'static str),

    #[error("dom operation failed: {0}")]
    Dom(#[from] DomError),
}
