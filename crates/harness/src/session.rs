//! Browser session lifecycle.
//!
//! A [`Session`] owns one connection to a WebDriver server with one active
//! page context. It is created at scenario start and closed at scenario end;
//! the scenario layer is responsible for closing it on every outcome so
//! browser processes do not leak across scenarios.

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::wait::{Dom, DomElement};

pub struct Session {
    client: Client,
}

impl Session {
    /// Start a fresh browser through the configured WebDriver server.
    pub async fn connect(config: &SuiteConfig) -> Result<Self> {
        debug!(
            target = "authflow",
            webdriver = %config.webdriver_url,
            headless = config.headless,
            "starting browser session"
        );
        let client = ClientBuilder::rustls()
            .map_err(|e| Error::BrowserConnect(e.to_string()))?
            .capabilities(chrome_capabilities(config))
            .connect(&config.webdriver_url)
            .await
            .map_err(|e| Error::BrowserConnect(e.to_string()))?;

        Ok(Self { client })
    }

    /// Navigate the active page context to `url`.
    pub async fn goto(&self, url: &str) -> Result<()> {
        debug!(target = "authflow", %url, "navigate");
        self.client.goto(url).await.map_err(|e| Error::Navigation {
            url: url.to_string(),
            source: e,
        })
    }

    /// First element matching `locator`, or `None` when nothing matches.
    ///
    /// This is a single immediate query; use [`crate::Wait`] when the page
    /// may still be rendering.
    pub async fn find(&self, locator: &Locator) -> Result<Option<Element>> {
        let mut matches = self.client.find_all(locator.to_webdriver()).await?;
        if matches.is_empty() {
            Ok(None)
        } else {
            Ok(Some(matches.remove(0)))
        }
    }

    /// Every element currently matching `locator`.
    pub async fn find_all(&self, locator: &Locator) -> Result<Vec<Element>> {
        Ok(self.client.find_all(locator.to_webdriver()).await?)
    }

    /// HTML source of the current page.
    pub async fn source(&self) -> Result<String> {
        Ok(self.client.source().await?)
    }

    /// The underlying WebDriver client, for operations the session does not
    /// wrap.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Close the browser and end the WebDriver session.
    pub async fn close(self) -> Result<()> {
        debug!(target = "authflow", "closing browser session");
        self.client.close().await?;
        Ok(())
    }
}

#[async_trait]
impl Dom for Session {
    type Element = Element;

    async fn query(&self, locator: &Locator) -> Result<Option<Element>> {
        self.find(locator).await
    }
}

#[async_trait]
impl DomElement for Element {
    async fn displayed(&self) -> Result<bool> {
        Ok(self.is_displayed().await?)
    }

    async fn enabled(&self) -> Result<bool> {
        Ok(self.is_enabled().await?)
    }
}

fn chrome_capabilities(config: &SuiteConfig) -> Map<String, Value> {
    let (width, height) = config.window_size;
    let mut args = vec![
        "--disable-gpu".to_string(),
        format!("--window-size={width},{height}"),
        // Containerized execution compatibility.
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
    ];
    if config.headless {
        args.insert(0, "--headless=new".to_string());
    }

    let mut caps = Map::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}
