//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules.

pub mod persistence;
