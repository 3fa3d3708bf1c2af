use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TriageError {
    #[error("No post-earthquake image is loaded. Upload an image or select an example first.")]
    NoImageLoaded,

    #[error("Unknown demo scenario: {0} (valid ids are 1-4)")]
    UnknownScenario(u8),
}
