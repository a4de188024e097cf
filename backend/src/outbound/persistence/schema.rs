//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Projects, each owned by exactly one user.
    projects (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning user; every quota count filters on this column.
        owner_id -> Uuid,
        /// Free-form title.
        title -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks filed under a project.
    ///
    /// `project_id` carries no foreign key; deleting a project leaves its
    /// tasks in place.
    tasks (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Project the task was filed under.
        project_id -> Uuid,
        /// Free-form title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// One of `Pending`, `In Progress` or `Completed`.
        status -> Text,
        /// Set once when the task is created.
        created_at -> Timestamptz,
        /// Instant of the latest update that set `Completed`.
        completed_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Bearer tokens issued to users, stored as SHA-256 fingerprints.
    access_tokens (fingerprint) {
        /// Hex-encoded SHA-256 of the raw token.
        fingerprint -> Text,
        /// User the token authenticates.
        user_id -> Uuid,
        /// Expiry; `NULL` never expires.
        expires_at -> Nullable<Timestamptz>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(projects, tasks);
