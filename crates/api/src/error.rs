#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The identifier does not name a member of the node kind taxonomy.
    #[error("Invalid variant: {0}")]
    InvalidVariant(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
