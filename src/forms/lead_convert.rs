use std::collections::HashSet;

use serde::Deserialize;
use validator::Validate;

use crate::domain::lead_convert::LeadConvertRequest;
use crate::forms::FormError;
use crate::models::config::LeadConvertSettings;

/// Form data submitted to convert a lead.
///
/// Flags left out of the payload fall back to [`LeadConvertSettings`].
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LeadConvertForm {
    /// Lead being converted.
    #[validate(length(min = 1))]
    pub lead_id: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub contact_id: Option<String>,
    #[serde(default)]
    pub converted_status: Option<String>,
    #[serde(default)]
    pub opportunity_name: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub do_not_create_opportunity: Option<bool>,
    #[serde(default)]
    pub overwrite_lead_source: Option<bool>,
    #[serde(default)]
    pub send_notification_email: Option<bool>,
}

/// Trims the value and drops it when nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Removes every HTML tag and decodes entities, leaving plain text.
///
/// `script` and `style` elements are dropped together with their content.
fn strip_markup(value: &str) -> String {
    let stripped = ammonia::Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(value)
        .to_string();
    html_escape::decode_html_entities(&stripped).into_owned()
}

impl LeadConvertForm {
    /// Validates the form and merges it with the configured defaults.
    pub fn into_request(
        self,
        settings: &LeadConvertSettings,
    ) -> Result<LeadConvertRequest, FormError> {
        self.validate()?;

        let lead_id = self.lead_id.trim();
        if lead_id.is_empty() {
            return Err(FormError::MissingLeadId);
        }

        let opportunity_name = match non_blank(self.opportunity_name) {
            Some(name) => {
                let sanitized = strip_markup(&name);
                let sanitized = sanitized.trim();
                if sanitized.is_empty() {
                    return Err(FormError::InvalidOpportunityName);
                }
                Some(sanitized.to_string())
            }
            None => None,
        };

        let base = settings.base_request();

        Ok(LeadConvertRequest {
            account_id: non_blank(self.account_id),
            contact_id: non_blank(self.contact_id),
            converted_status: non_blank(self.converted_status).or(base.converted_status),
            do_not_create_opportunity: self
                .do_not_create_opportunity
                .unwrap_or(base.do_not_create_opportunity),
            lead_id: Some(lead_id.to_string()),
            opportunity_name,
            overwrite_lead_source: self
                .overwrite_lead_source
                .unwrap_or(base.overwrite_lead_source),
            owner_id: non_blank(self.owner_id).or(base.owner_id),
            send_notification_email: self
                .send_notification_email
                .unwrap_or(base.send_notification_email),
        })
    }
}

impl TryFrom<LeadConvertForm> for LeadConvertRequest {
    type Error = FormError;

    fn try_from(form: LeadConvertForm) -> Result<Self, Self::Error> {
        form.into_request(&LeadConvertSettings::default())
    }
}
