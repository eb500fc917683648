use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// The dictionary could not be loaded; the checker is not operating.
    #[error("dictionary unavailable: {reason}")]
    DictionaryUnavailable { reason: String },

    #[error("dictionary already loaded")]
    AlreadyLoaded,

    #[error("failed to build dictionary: {0}")]
    Build(#[from] fst::Error),
}
