use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodonForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Unknown genetic code: {0}")]
    UnknownGeneticCode(u32),

    #[error("No codon mapping for amino acid '{0}'")]
    UnknownAminoAcid(char),
}

pub type CfResult<T> = Result<T, CodonForgeError>;
