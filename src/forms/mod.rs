//! Form definitions accepted from callers before they become requests.

use thiserror::Error;
use validator::ValidationErrors;

pub mod lead_convert;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("lead id is required")]
    MissingLeadId,

    #[error("invalid opportunity name")]
    InvalidOpportunityName,
}
