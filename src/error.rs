use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error(
        "Generation failed: produced {produced} of {requested} menus, gave up after {attempts} consecutive rejections"
    )]
    GenerationFailed {
        produced: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
