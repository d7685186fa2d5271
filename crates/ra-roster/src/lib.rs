//! The user-management view: roster cache, row selection and bulk mutations.

pub mod error;
mod in_flight;
pub mod mutation;
pub mod roster_manager;
pub mod selection_summary;
pub mod view_state;

pub use error::{Result, RosterError};
pub use mutation::{MutationKind, MutationOutcome};
pub use roster_manager::RosterManager;
pub use selection_summary::SelectionSummary;
pub use view_state::ViewState;

#[cfg(test)]
mod tests;
