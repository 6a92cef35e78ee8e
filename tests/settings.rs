use std::env;

use crm_soap_requests::models::config::LeadConvertSettings;

// Kept as a single test: it mutates process-wide environment variables.
#[test]
fn test_load_applies_environment_overrides() {
    let defaults = LeadConvertSettings::load("missing-profile").unwrap();
    assert_eq!(defaults, LeadConvertSettings::default());

    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe {
        env::set_var("APP_OWNER_ID", "005X");
        env::set_var("APP_SEND_NOTIFICATION_EMAIL", "true");
    }

    let settings = LeadConvertSettings::load("missing-profile");

    unsafe {
        env::remove_var("APP_OWNER_ID");
        env::remove_var("APP_SEND_NOTIFICATION_EMAIL");
    }

    let settings = settings.unwrap();
    assert_eq!(settings.owner_id.as_deref(), Some("005X"));
    assert!(settings.send_notification_email);
    assert_eq!(settings.converted_status, None);
    assert!(!settings.do_not_create_opportunity);
    assert!(!settings.overwrite_lead_source);
}
