use thiserror::Error;

use tf_core::TellerId;

#[derive(Debug, Error)]
pub enum FloorError {
    #[error("teller {teller} is {state}; cannot {attempted}")]
    InvalidTransition {
        teller:    TellerId,
        state:     &'static str,
        attempted: &'static str,
    },

    #[error("teller {0} does not exist")]
    UnknownTeller(TellerId),
}

pub type FloorResult<T> = Result<T, FloorError>;
