use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("window error: {0}")]
    Ui(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
