use crate::adapters::emailjs::DEFAULT_ENDPOINT;
use crate::core::contact::ContactTemplates;
use crate::domain::model::CvDocument;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub title: String,
    pub output_path: String,
    pub cv_url: String,
    pub cv_download_name: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            output_path: "./dist".to_string(),
            cv_url: "/cvcv/Youssef Yaakoubi EN.pdf".to_string(),
            cv_download_name: "Youssef_Yaakoubi_CV.pdf".to_string(),
        }
    }
}

/// EmailJS account identifiers. The defaults are the site's public ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub owner_template_id: String,
    pub auto_reply_template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: "service_kn2clos".to_string(),
            owner_template_id: "template_910vc0c".to_string(),
            auto_reply_template_id: "template_h2u2jgv".to_string(),
            public_key: "9ljdQtUXQvi7CRpN9".to_string(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given; otherwise `site.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                tracing::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EMAILJS_PUBLIC_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("site.output_path", &self.site.output_path)?;
        validate_non_empty_string("site.cv_url", &self.site.cv_url)?;
        validate_non_empty_string("site.cv_download_name", &self.site.cv_download_name)?;

        validate_url("relay.endpoint", &self.relay.endpoint)?;
        validate_non_empty_string("relay.service_id", &self.relay.service_id)?;
        validate_non_empty_string("relay.owner_template_id", &self.relay.owner_template_id)?;
        validate_non_empty_string(
            "relay.auto_reply_template_id",
            &self.relay.auto_reply_template_id,
        )?;
        validate_non_empty_string("relay.public_key", &self.relay.public_key)?;

        for (field, value) in [
            ("relay.service_id", &self.relay.service_id),
            ("relay.public_key", &self.relay.public_key),
        ] {
            if value.starts_with("${") {
                return Err(SiteError::MissingConfigError {
                    field: format!("{} (unresolved {})", field, value),
                });
            }
        }

        Ok(())
    }

    pub fn templates(&self) -> ContactTemplates {
        ContactTemplates {
            owner_template_id: self.relay.owner_template_id.clone(),
            auto_reply_template_id: self.relay.auto_reply_template_id.clone(),
        }
    }

    pub fn cv(&self) -> CvDocument {
        CvDocument {
            url: self.site.cv_url.clone(),
            download_name: self.site.cv_download_name.clone(),
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[site]
title = "Jackubs"
output_path = "./public"
cv_url = "/cv.pdf"
cv_download_name = "cv.pdf"

[relay]
endpoint = "https://relay.example.com"
service_id = "service_a"
owner_template_id = "template_owner"
auto_reply_template_id = "template_reply"
public_key = "key"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.title, "Jackubs");
        assert_eq!(config.relay.endpoint, "https://relay.example.com");
        assert_eq!(config.templates().auto_reply_template_id, "template_reply");
        assert_eq!(config.cv().download_name, "cv.pdf");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = SiteConfig::from_toml_str("[site]\ntitle = \"Mine\"\n").unwrap();

        assert_eq!(config.site.title, "Mine");
        assert_eq!(config.site.output_path, "./dist");
        assert_eq!(config.relay, RelayConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_PUBLIC_KEY", "pk_from_env");

        let toml_content = r#"
[relay]
public_key = "${PORTFOLIO_TEST_PUBLIC_KEY}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.relay.public_key, "pk_from_env");

        std::env::remove_var("PORTFOLIO_TEST_PUBLIC_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[relay]
service_id = "${PORTFOLIO_TEST_UNSET_SERVICE}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.relay.service_id, "${PORTFOLIO_TEST_UNSET_SERVICE}");
        assert!(matches!(
            config.validate(),
            Err(SiteError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[relay]
endpoint = "invalid-url"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SiteConfig::from_toml_str("[site\ntitle = 1").unwrap_err();
        assert!(matches!(err, SiteError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
title = "file-test"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.site.title, "file-test");
    }
}
