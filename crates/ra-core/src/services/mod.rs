//! Contracts of the hosted backend.
//!
//! Components receive these as `Arc<dyn ...>` handles at construction; nothing
//! in the workspace reaches for a shared global client.

pub mod identity_service;
pub mod profile_store;
