use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Browser window is not available")]
    WindowUnavailable,

    #[error("Document is not available")]
    DocumentUnavailable,

    #[error("Failed to attach document {event} listener: {details}")]
    ListenerAttach { event: String, details: String },
}
