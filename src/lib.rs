//! Request types and glue for the CRM SOAP "convert lead" call.
//!
//! [`domain::lead_convert::LeadConvertRequest`] carries the call parameters.
//! Input forms, configured defaults and the transport seam live in the
//! [`forms`], [`models`] and [`gateway`] modules.

pub mod domain;
pub mod forms;
pub mod gateway;
pub mod models;
pub mod services;

pub use domain::lead_convert::LeadConvertRequest;
