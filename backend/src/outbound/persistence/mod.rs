//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain types and map every
//! database failure to the owning port's `Connection`/`Query` error. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module.
//!
//! ```ignore
//! use taskboard::outbound::persistence::{DbPool, DieselTaskRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/taskboard")).await?;
//! let tasks = DieselTaskRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_identity_provider;
mod diesel_project_repository;
mod diesel_task_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_identity_provider::DieselIdentityProvider;
pub use diesel_project_repository::DieselProjectRepository;
pub use diesel_task_repository::DieselTaskRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
