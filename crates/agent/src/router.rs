//! Status → route decision.

use recruitem_core::Route;

/// Pick the specialist for a recruitment status.
///
/// Only `"assessment"` (any letter case) selects the assessment agent.
/// Everything else, including an empty status and values with
/// surrounding whitespace, goes to the interview agent.
pub fn route(status: &str) -> Route {
    if status.to_lowercase() == "assessment" {
        Route::Assessment
    } else {
        Route::Interview
    }
}
