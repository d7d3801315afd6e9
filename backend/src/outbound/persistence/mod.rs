//! PostgreSQL persistence adapters built on Diesel.
//!
//! Repositories are thin: they translate Diesel rows into domain types and
//! Diesel failures into port errors. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module. Connections come
//! from a `bb8` pool of `diesel-async` connections.
//!
//! # Example
//!
//! ```no_run
//! use travel_tracker::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://postgres@localhost/world")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_country_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod diesel_visit_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_country_repository::DieselCountryRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_visit_repository::DieselVisitRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
