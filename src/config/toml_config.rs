use crate::core::links::whatsapp_link;
use crate::core::submission::SubmissionMessages;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_phone_digits, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub backend: BackendConfig,
    pub contact: ContactConfig,
    pub notifications: Option<NotificationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
    pub schema_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub whatsapp_phone: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub success_message: Option<String>,
    pub failure_message: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPABASE_ANON_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Toast texts, with config overrides applied over the defaults.
    pub fn submission_messages(&self) -> SubmissionMessages {
        let mut messages = SubmissionMessages::with_whatsapp(self.whatsapp_phone());
        if let Some(overrides) = &self.notifications {
            if let Some(success) = &overrides.success_message {
                messages.success = success.clone();
            }
            if let Some(failure) = &overrides.failure_message {
                let chat = whatsapp_link(self.whatsapp_phone());
                messages.failure = if failure.contains(&chat) {
                    failure.clone()
                } else {
                    format!("{}: {}", failure.trim_end(), chat)
                };
            }
        }
        messages
    }
}

impl ConfigProvider for SiteConfig {
    fn backend_url(&self) -> &str {
        &self.backend.url
    }

    fn api_key(&self) -> &str {
        &self.backend.api_key
    }

    fn schema_path(&self) -> &str {
        self.backend.schema_path.as_deref().unwrap_or("rest/v1")
    }

    fn whatsapp_phone(&self) -> &str {
        &self.contact.whatsapp_phone
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.url", &self.backend.url)?;
        validate_non_empty_string("backend.api_key", &self.backend.api_key)?;

        // An unresolved placeholder means the variable was not exported.
        if self.backend.api_key.starts_with("${") {
            return Err(SiteError::MissingConfigError {
                field: "backend.api_key".to_string(),
            });
        }

        validate_phone_digits("contact.whatsapp_phone", &self.contact.whatsapp_phone)?;
        validate_phone_digits("contact.phone", &self.contact.phone)?;
        Ok(())
    }
}
