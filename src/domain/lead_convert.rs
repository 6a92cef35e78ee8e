//! Domain model for the CRM "convert lead" call.

use serde::{Deserialize, Serialize};

/// Parameters of a lead conversion handed to the SOAP transport.
///
/// The struct is an inert value holder: nothing is validated here, not even
/// the lead identifier the remote API requires. Serialized keys follow the
/// remote parameter names (`leadId`, `sendNotificationEmail`, ...) and unset
/// optional fields are left out.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadConvertRequest {
    /// Existing account the converted lead is merged into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Existing contact the converted lead is merged into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    /// Lead status label applied on conversion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_status: Option<String>,
    pub do_not_create_opportunity: bool,
    /// Lead being converted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    /// Name of the opportunity created alongside the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_name: Option<String>,
    pub overwrite_lead_source: bool,
    /// Owner of the records produced by the conversion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub send_notification_email: bool,
}

impl LeadConvertRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn contact_id(mut self, contact_id: impl Into<String>) -> Self {
        self.contact_id = Some(contact_id.into());
        self
    }

    pub fn converted_status(mut self, status: impl Into<String>) -> Self {
        self.converted_status = Some(status.into());
        self
    }

    pub fn do_not_create_opportunity(mut self, value: bool) -> Self {
        self.do_not_create_opportunity = value;
        self
    }

    pub fn lead_id(mut self, lead_id: impl Into<String>) -> Self {
        self.lead_id = Some(lead_id.into());
        self
    }

    pub fn opportunity_name(mut self, name: impl Into<String>) -> Self {
        self.opportunity_name = Some(name.into());
        self
    }

    pub fn overwrite_lead_source(mut self, value: bool) -> Self {
        self.overwrite_lead_source = value;
        self
    }

    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn send_notification_email(mut self, value: bool) -> Self {
        self.send_notification_email = value;
        self
    }
}
