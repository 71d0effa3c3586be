use vitrine_core::error::CoreError;

/// Errors raised by [`crate::catalog::ThemeCatalog`].
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ThemeError {
    pub fn not_found(id: vitrine_core::types::DbId) -> Self {
        Self::Core(CoreError::NotFound { entity: "Theme", id })
    }
}
