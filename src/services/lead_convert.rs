use crate::domain::lead_convert::LeadConvertRequest;
use crate::forms::lead_convert::LeadConvertForm;
use crate::gateway::LeadConverter;
use crate::models::config::LeadConvertSettings;
use crate::services::{ServiceError, ServiceResult};

/// Turns the submitted form into a request using the configured defaults.
pub fn build_lead_convert_request(
    settings: &LeadConvertSettings,
    form: LeadConvertForm,
) -> ServiceResult<LeadConvertRequest> {
    form.into_request(settings).map_err(|err| {
        log::error!("Failed to build lead conversion request: {err}");
        ServiceError::from(err)
    })
}

/// Builds the request and hands it to the gateway, returning what was sent.
pub fn convert_lead<G>(
    gateway: &G,
    settings: &LeadConvertSettings,
    form: LeadConvertForm,
) -> ServiceResult<LeadConvertRequest>
where
    G: LeadConverter + ?Sized,
{
    let request = build_lead_convert_request(settings, form)?;

    let lead_id = request.lead_id.as_deref().unwrap_or_default();
    log::info!("Converting lead {lead_id}");

    gateway.convert_lead(&request).map_err(|err| {
        log::error!("Failed to convert lead {lead_id}: {err}");
        err
    })?;

    Ok(request)
}
