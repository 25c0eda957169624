/// Everything that can go wrong while asking the move service.
///
/// None of these reach the player: the engine logs them and lets the next
/// engine in the chain pick the move.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no API key: ${0} is not set")]
    MissingApiKey(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service answered with HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("reply contains no JSON object")]
    NoJson,

    #[error("reply is not a move: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("suggested move {0} is not legal here")]
    IllegalSuggestion(String),
}
