use mazen_layout::LayoutError;

/// Errors that abort enclosure or session setup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidGrid(#[from] LayoutError),
    #[error("session started before a viewer was attached")]
    NoViewerAttached,
}
