use thiserror::Error;

use tf_core::CoreError;
use tf_floor::FloorError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("service area error: {0}")]
    Floor(#[from] FloorError),
}

pub type SimResult<T> = Result<T, SimError>;
