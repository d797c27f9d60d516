use bedrock_profiles::CredentialValues;
use serde::Deserialize;

const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_region: Option<String>,
    /// Used when the AWS_* variables are not set
    pub credentials: CredentialValues,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}

/// UI configuration for the console
///
/// Themes: `warm` (default) and `mono`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "warm".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_region, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.rotate_keep, DEFAULT_LOG_ROTATE_KEEP);
        assert_eq!(config.ui.theme, "warm");
        assert!(config.credentials.access_key_id.is_none());
    }

    #[test]
    fn full_document() {
        let config: AppConfig = toml::from_str(
            r#"
            default_region = "ap-northeast-1"

            [credentials]
            access_key_id = "AKIAFILE"
            secret_access_key = "file-secret"

            [logging]
            level = "debug"
            rotate_keep = 2

            [ui]
            theme = "mono"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(config.credentials.access_key_id.as_deref(), Some("AKIAFILE"));
        assert_eq!(
            config
                .credentials
                .secret_access_key
                .as_ref()
                .map(|s| s.expose_secret().as_str()),
            Some("file-secret")
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.rotate_keep, 2);
        assert_eq!(config.logging.rotate_size, DEFAULT_LOG_ROTATE_SIZE);
        assert_eq!(config.ui.theme, "mono");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config: AppConfig = toml::from_str(
            r#"
            [credentials]
            secret_access_key = "file-secret"
            "#,
        )
        .unwrap();
        assert!(!format!("{config:?}").contains("file-secret"));
    }
}
