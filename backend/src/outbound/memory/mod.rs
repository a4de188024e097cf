//! In-process adapters used when no database is configured, and by tests.

mod identity;
mod project;
mod task;

pub use identity::StaticIdentityProvider;
pub use project::InMemoryProjectRepository;
pub use task::InMemoryTaskRepository;
