mod error;
mod frames;
mod observer;
mod pass_finder;
mod position;
mod propagation;
mod schedule;
#[cfg(test)]
mod testdata;
mod types;

pub use error::PredictError;
pub use observer::Observer;
pub use pass_finder::predict_passes;
pub use position::current_position;
pub use types::{PassRecord, SatellitePosition};
