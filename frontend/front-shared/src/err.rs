#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("Payload error: {0}")]
    Payload(#[from] shared::Error),
}
