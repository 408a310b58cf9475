use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("'{0}' not found in catalog")]
    NotFound(String),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Failure of the collaborator that picks the player's move.
#[derive(Debug, Error)]
pub enum ChoiceError {
    #[error("input closed before a move was chosen")]
    InputClosed,

    #[error("failed to read choice: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("a move set needs at least one move")]
    Empty,

    #[error("move '{0}' has no power")]
    ZeroPower(String),

    #[error("move '{name}' has accuracy {accuracy}, expected 0..=100")]
    AccuracyOutOfRange { name: String, accuracy: u32 },
}

#[derive(Debug, Error)]
pub enum BattleError {
    #[error("move choice failed: {0}")]
    Choice(#[from] ChoiceError),

    #[error("move index {index} out of range for {len} moves")]
    InvalidChoice { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(&'static str),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Battle(#[from] BattleError),
}
