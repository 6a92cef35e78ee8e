//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::domain::lead_convert::LeadConvertRequest;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Organisation-wide defaults applied to every lead conversion.
pub struct LeadConvertSettings {
    pub converted_status: Option<String>,
    pub owner_id: Option<String>,
    pub do_not_create_opportunity: bool,
    pub overwrite_lead_source: bool,
    pub send_notification_email: bool,
}

impl LeadConvertSettings {
    /// Loads settings from `config/default`, `config/{app_env}` and `APP_*`
    /// environment variables, later sources overriding earlier ones.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    /// Builds settings from an inline YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    /// Returns a request pre-populated with these defaults.
    #[must_use]
    pub fn base_request(&self) -> LeadConvertRequest {
        LeadConvertRequest {
            converted_status: self.converted_status.clone(),
            owner_id: self.owner_id.clone(),
            do_not_create_opportunity: self.do_not_create_opportunity,
            overwrite_lead_source: self.overwrite_lead_source,
            send_notification_email: self.send_notification_email,
            ..LeadConvertRequest::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_yaml_reads_all_fields() {
        let settings = LeadConvertSettings::from_yaml(
            "converted_status: Qualified\n\
             owner_id: 005OWNER\n\
             do_not_create_opportunity: true\n\
             overwrite_lead_source: true\n\
             send_notification_email: true\n",
        )
        .unwrap();

        assert_eq!(settings.converted_status.as_deref(), Some("Qualified"));
        assert_eq!(settings.owner_id.as_deref(), Some("005OWNER"));
        assert!(settings.do_not_create_opportunity);
        assert!(settings.overwrite_lead_source);
        assert!(settings.send_notification_email);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings = LeadConvertSettings::from_yaml("converted_status: Qualified\n").unwrap();

        assert_eq!(
            settings,
            LeadConvertSettings {
                converted_status: Some("Qualified".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn base_request_carries_defaults_only() {
        let settings = LeadConvertSettings {
            converted_status: Some("Qualified".to_string()),
            send_notification_email: true,
            ..Default::default()
        };

        let request = settings.base_request();

        assert_eq!(request.converted_status.as_deref(), Some("Qualified"));
        assert!(request.send_notification_email);
        assert_eq!(request.lead_id, None);
        assert_eq!(request.owner_id, None);
    }
}
