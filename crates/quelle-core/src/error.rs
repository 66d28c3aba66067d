#[derive(Debug, thiserror::Error)]
pub enum QuelleError {
    #[error("no water values could be recognized in the request")]
    NoValuesDetected,

    #[error("label text too long: {len} characters (maximum {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("{metric}: {value} is outside the accepted input range [{min}, {max}]")]
    SchemaViolation {
        metric: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown profile '{0}'. Available: standard, baby, sport, blood_pressure, coffee, kidney")]
    UnknownProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
