use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KanbanError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl KanbanError {
    /// The referenced card does not exist (a transport maps this to 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CardNotFound(_))
    }

    /// The caller sent malformed input (a transport maps this to 400).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, KanbanError>;
