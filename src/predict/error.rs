use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),
    #[error("invalid observer: {0}")]
    InvalidObserver(String),
    #[error("invalid horizon: {0} days")]
    InvalidHorizon(f64),
    #[error("propagation error: {0}")]
    Propagation(String),
}
