//! PostgreSQL Repository Implementations

mod memory_repository;
mod reminder_repository;
mod suggestion_repository;

pub use memory_repository::PgMemoryRepository;
pub use reminder_repository::PgReminderRepository;
pub use suggestion_repository::PgSuggestionRepository;

use kioku::DomainError;

/// Parse a TEXT enum column, treating unknown literals as store corruption
fn parse_column<T>(column: &str, value: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e: String| DomainError::Repository(format!("{column}: {e}")))
}

fn parse_optional_column<T>(column: &str, value: Option<String>) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    value.map(|v| parse_column(column, &v)).transpose()
}
