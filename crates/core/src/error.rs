#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest unavailable (HTTP status {status})")]
    ManifestUnavailable { status: u16 },

    #[error("manifest is not valid JSON: {0}")]
    ManifestMalformed(String),

    #[error("manifest transport error: {0}")]
    Transport(String),

    #[error("event not found: {0}")]
    EventNotFound(usize),

    #[error("image index {index} out of range (visible images: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no event is open, run with an event selected first")]
    NoEventOpen,

    #[error("not an event gallery")]
    NotEventGallery,
}

pub type Result<T> = std::result::Result<T, Error>;
