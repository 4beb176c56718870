//! Suite configuration.
//!
//! The target address and WebDriver endpoint are resolved from the
//! environment once, at scenario-set startup, and handed to every scenario.

use std::env;

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

const LOGIN_SUFFIX: &str = "/login";

/// Resolved configuration for one scenario-set run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base address of the frontend under test.
    pub base_url: String,
    /// Append [`LOGIN_SUFFIX`] to the base URL when it is not already there.
    pub require_login_suffix: bool,
    /// Address of the WebDriver server (chromedriver).
    pub webdriver_url: String,
    /// Run the browser without a visible UI.
    pub headless: bool,
    /// Fixed viewport, for deterministic layout.
    pub window_size: (u32, u32),
}

impl SuiteConfig {
    /// Resolve from `BASE_URL`, `BASE_URL_LOGIN_SUFFIX`, and `WEBDRIVER_URL`.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            env::var("BASE_URL").ok(),
            env::var("BASE_URL_LOGIN_SUFFIX").ok(),
            env::var("WEBDRIVER_URL").ok(),
        )
    }

    fn resolve(
        base_url: Option<String>,
        login_suffix: Option<String>,
        webdriver_url: Option<String>,
    ) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base url `{base_url}`: {e}")))?;

        let webdriver_url = webdriver_url.unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_string());
        Url::parse(&webdriver_url)
            .map_err(|e| Error::Config(format!("invalid webdriver url `{webdriver_url}`: {e}")))?;

        let require_login_suffix = login_suffix
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            base_url,
            require_login_suffix,
            webdriver_url,
            headless: true,
            window_size: (1920, 1080),
        })
    }

    /// Address of the auth view: the base URL, with the login path appended
    /// when configured and not already present.
    pub fn auth_url(&self) -> String {
        if !self.require_login_suffix {
            return self.base_url.clone();
        }
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.ends_with(LOGIN_SUFFIX) {
            trimmed.to_string()
        } else {
            format!("{trimmed}{LOGIN_SUFFIX}")
        }
    }
}
