//! Domain layer: core entities and business rules.

pub mod entry;
pub mod events;
pub mod flash_state;
pub mod message_input_state;
pub mod nav_panel_state;
pub mod shell_state;
pub mod transcript_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
