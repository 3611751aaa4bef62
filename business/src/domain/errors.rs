/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.corrupt_data")]
    CorruptData,
    /// The stored revision moved on since the aggregate was read.
    #[error("repository.conflict")]
    Conflict,
}
