//! Domain types exchanged with the CRM SOAP API.

pub mod lead_convert;
