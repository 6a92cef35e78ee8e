use thiserror::Error;

use crate::forms::FormError;
use crate::gateway::GatewayError;

pub mod lead_convert;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
