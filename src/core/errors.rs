use async_graphql::ErrorExtensions;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A referenced post or user id does not exist.
    #[error("Not Found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn post_not_found(id: &str) -> Self {
        ApiError::NotFound(format!("post {}", id))
    }

    pub fn user_not_found(id: &str) -> Self {
        ApiError::NotFound(format!("user {}", id))
    }

    /// Machine-readable code carried in the GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", self.code()))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
