use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReclassifyError {
    #[error("No JSON object found in model response: {0}")]
    Extraction(String),

    #[error("Reclassified data is not a mapping of sections: {0}")]
    Schema(String),

    #[error("Could not produce the report: {0}")]
    Render(String),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReclassifyError>;
