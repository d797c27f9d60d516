use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::{ConsoleError, Result};

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Name reported to the SDK as the origin of the static credentials
const PROVIDER_NAME: &str = "bedrock-profiles";

/// Credential values from a secondary source such as the config file.
///
/// Every field is optional; [`Credentials::resolve`] decides whether the
/// combination with the environment is complete.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CredentialValues {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<SecretString>,
    pub session_token: Option<SecretString>,
}

/// Static AWS credentials, validated once at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: SecretString,
    session_token: Option<SecretString>,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into()),
            session_token: session_token.map(SecretString::new),
        }
    }

    /// Loads credentials from the process environment, falling back to `fallback`.
    pub fn from_env(fallback: &CredentialValues) -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok(), fallback)
    }

    /// Resolves credentials from `lookup` (usually the environment), then `fallback`.
    ///
    /// A missing access key id or secret access key is a configuration error;
    /// the session token is optional.
    pub fn resolve<L>(lookup: L, fallback: &CredentialValues) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        let access_key_id = non_empty(lookup(ACCESS_KEY_ID_VAR))
            .or_else(|| non_empty(fallback.access_key_id.clone()));
        let secret_access_key = non_empty(lookup(SECRET_ACCESS_KEY_VAR)).or_else(|| {
            non_empty(
                fallback
                    .secret_access_key
                    .as_ref()
                    .map(|s| s.expose_secret().clone()),
            )
        });
        let session_token = non_empty(lookup(SESSION_TOKEN_VAR)).or_else(|| {
            non_empty(
                fallback
                    .session_token
                    .as_ref()
                    .map(|s| s.expose_secret().clone()),
            )
        });

        match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(Self::new(
                access_key_id,
                secret_access_key,
                session_token,
            )),
            _ => Err(ConsoleError::Configuration(format!(
                "AWS credentials are not set. Set {ACCESS_KEY_ID_VAR} and {SECRET_ACCESS_KEY_VAR}."
            ))),
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn has_session_token(&self) -> bool {
        self.session_token.is_some()
    }

    /// Builds the SDK credentials; this is the only place secrets are exposed.
    pub fn to_sdk(&self) -> aws_credential_types::Credentials {
        aws_credential_types::Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.expose_secret().clone(),
            self.session_token
                .as_ref()
                .map(|token| token.expose_secret().clone()),
            None,
            PROVIDER_NAME,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn resolves_from_environment() {
        let creds = Credentials::resolve(
            lookup(&[
                (ACCESS_KEY_ID_VAR, "AKIAEXAMPLE"),
                (SECRET_ACCESS_KEY_VAR, "secret"),
                (SESSION_TOKEN_VAR, "token"),
            ]),
            &CredentialValues::default(),
        )
        .unwrap();
        assert_eq!(creds.access_key_id(), "AKIAEXAMPLE");
        assert!(creds.has_session_token());
    }

    #[test]
    fn missing_secret_is_configuration_error() {
        let err = Credentials::resolve(
            lookup(&[(ACCESS_KEY_ID_VAR, "AKIAEXAMPLE")]),
            &CredentialValues::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConsoleError::Configuration(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn empty_variables_count_as_missing() {
        let err = Credentials::resolve(
            lookup(&[(ACCESS_KEY_ID_VAR, ""), (SECRET_ACCESS_KEY_VAR, "secret")]),
            &CredentialValues::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConsoleError::Configuration(_)));
    }

    #[test]
    fn falls_back_to_config_values() {
        let fallback = CredentialValues {
            access_key_id: Some("AKIAFILE".into()),
            secret_access_key: Some(SecretString::new("file-secret".into())),
            session_token: None,
        };
        let creds = Credentials::resolve(lookup(&[]), &fallback).unwrap();
        assert_eq!(creds.access_key_id(), "AKIAFILE");
        assert!(!creds.has_session_token());
    }

    #[test]
    fn environment_wins_over_config() {
        let fallback = CredentialValues {
            access_key_id: Some("AKIAFILE".into()),
            secret_access_key: Some(SecretString::new("file-secret".into())),
            session_token: None,
        };
        let creds =
            Credentials::resolve(lookup(&[(ACCESS_KEY_ID_VAR, "AKIAENV")]), &fallback).unwrap();
        assert_eq!(creds.access_key_id(), "AKIAENV");
    }

    #[test]
    fn debug_output_redacts_secret() {
        let creds = Credentials::new("AKIA", "super-secret", None);
        assert!(!format!("{creds:?}").contains("super-secret"));
    }
}
