//! Seam towards the SOAP client that actually performs the conversion.

use thiserror::Error;

use crate::domain::lead_convert::LeadConvertRequest;

#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The remote API refused the conversion.
    #[error("Conversion rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Implemented by the transport layer that maps a [`LeadConvertRequest`]
/// onto the remote `convertLead` call.
pub trait LeadConverter {
    fn convert_lead(&self, request: &LeadConvertRequest) -> GatewayResult<()>;
}
