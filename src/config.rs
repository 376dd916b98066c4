// Client configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConfigResultExt, Error};
use crate::validation;

/// Default service endpoint, used when the caller supplies none.
pub const DEFAULT_ENDPOINT: &str = "https://privateca.googleapis.com";

/// Options governing endpoint selection and client metadata.
///
/// Client version metadata is an explicit per-client value with a documented
/// fallback (`privca/<crate version>`), never process-wide state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientOptions {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// User-agent string sent with every request. Falls back to
    /// `privca/<crate version>` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Static bearer token attached to requests. Credential negotiation is
    /// out of scope; anything beyond a fixed token belongs in a custom
    /// transport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: None,
            auth_token: None,
        }
    }
}

impl ClientOptions {
    /// Load options from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self, Error> {
        let contents =
            std::fs::read_to_string(path).config_err(&format!("Failed to read '{}'", path))?;
        let options: ClientOptions =
            serde_yaml::from_str(&contents).config_err(&format!("Failed to parse '{}'", path))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), Error> {
        validation::validate_endpoint(&self.endpoint)
    }

    /// The user-agent to send, applying the documented fallback.
    pub fn resolved_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("privca/{}", env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);
        assert!(options.user_agent.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_user_agent_fallback() {
        let options = ClientOptions::default();
        assert_eq!(
            options.resolved_user_agent(),
            format!("privca/{}", env!("CARGO_PKG_VERSION"))
        );

        let options = ClientOptions {
            user_agent: Some("my-app/2.0".to_string()),
            ..ClientOptions::default()
        };
        assert_eq!(options.resolved_user_agent(), "my-app/2.0");
    }

    #[test]
    fn test_yaml_round_trip() {
        let options = ClientOptions {
            endpoint: "https://ca.internal.example".to_string(),
            user_agent: Some("svc/1".to_string()),
            auth_token: None,
        };

        let yml = serde_yaml::to_string(&options).unwrap();
        let deserde: ClientOptions = serde_yaml::from_str(&yml).unwrap();
        assert_eq!(options, deserde);
    }

    #[test]
    fn test_skip_none_fields_in_yaml() {
        let options = ClientOptions::default();
        let yml = serde_yaml::to_string(&options).unwrap();

        // None fields are not serialized
        assert!(!yml.contains("user_agent:"));
        assert!(!yml.contains("auth_token:"));
        assert!(yml.contains("endpoint:"));
    }

    #[test]
    fn test_missing_endpoint_uses_default() {
        let options: ClientOptions = serde_yaml::from_str("user_agent: svc/1\n").unwrap();
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(options.user_agent.as_deref(), Some("svc/1"));
    }
}
