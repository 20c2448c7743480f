//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

/// Resolve the database URL from the environment, preferring the
/// service-specific variable over the generic one.
fn database_url() -> Option<String> {
    std::env::var("VESTIUBEM_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
}
