//! Outbound adapters implementing domain ports.
//!
//! - **memory**: lock-guarded in-process stores for tests and local runs
//! - **persistence**: PostgreSQL-backed repositories using Diesel
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules beyond the atomic quota check.

pub mod memory;
pub mod persistence;
