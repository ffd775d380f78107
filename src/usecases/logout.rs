//! Use case for the logout navigation.
//!
//! Mirrors a full-page navigation: one bodyless request to the logout
//! endpoint, no confirmation step, and the shell leaves regardless of the
//! transport outcome.

use super::contracts::LogoutNavigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutcome {
    /// Whether the server acknowledged the logout request.
    pub server_notified: bool,
}

pub fn logout(navigator: &dyn LogoutNavigator) -> LogoutOutcome {
    match navigator.navigate_logout() {
        Ok(()) => LogoutOutcome {
            server_notified: true,
        },
        Err(error) => {
            tracing::warn!(error = ?error, "logout navigation failed, leaving anyway");
            LogoutOutcome {
                server_notified: false,
            }
        }
    }
}
