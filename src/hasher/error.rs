use super::Algorithm;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("No hash algorithm specified")]
    NoAlgorithmSpecified,
    #[error("No states provided")]
    NoStateProvided,
    #[error("Algorithms of saved states {0:?} don't match requested algorithms {1:?}")]
    AlgorithmSetMismatch(Vec<Algorithm>, Vec<Algorithm>),
    #[error("Fail to import state of {0}: {1}")]
    StateImportFailed(Algorithm, String),
    #[error("{0} doesn't support state export")]
    StateExportUnsupported(Algorithm),
    #[error("Hashers have been sealed by state export and cannot accept data anymore")]
    ConsumerProtocolViolation,
}
