//! Explicit wait-and-locate helper.
//!
//! Pages render asynchronously; querying the DOM immediately after a
//! navigation or a click races against that rendering. [`Wait`] centralizes
//! the polling policy instead: it re-queries the DOM on a fixed interval
//! until the element reaches the required readiness condition or the
//! deadline passes. Every scenario goes through the same timeout/interval
//! policy rather than carrying its own sleeps.
//!
//! The helper polls through the [`Dom`] seam so the loop can be exercised
//! against a scripted DOM ([`crate::testing::MockDom`]) without a browser.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, sleep};
use tracing::trace;

use crate::error::{Error, Result};
use crate::locator::Locator;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

/// DOM lookup abstraction the wait helper polls through.
///
/// Implemented by [`crate::Session`] against a live browser and by
/// [`crate::testing::MockDom`] in unit tests.
#[async_trait]
pub trait Dom {
    type Element: DomElement;

    /// First element matching `locator`, or `None` when nothing matches yet.
    async fn query(&self, locator: &Locator) -> Result<Option<Self::Element>>;
}

/// Readiness probes on a located element.
#[async_trait]
pub trait DomElement {
    async fn displayed(&self) -> Result<bool>;
    async fn enabled(&self) -> Result<bool>;
}

/// Polling policy: how long to keep trying, and how often.
#[derive(Debug, Clone, Copy)]
pub struct Wait {
    timeout: Duration,
    interval: Duration,
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl Wait {
    /// Poll with the given deadline and the default interval.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Poll until at least one element matches `locator` and return a handle
    /// to the first match.
    ///
    /// Fails with [`Error::ElementNotFound`] once the deadline passes. The
    /// error carries the locator and the elapsed wait. Never fails before
    /// the timeout has elapsed, and resolves within one interval of the
    /// element appearing.
    pub async fn for_present<D: Dom>(&self, dom: &D, locator: &Locator) -> Result<D::Element> {
        let start = Instant::now();
        loop {
            if let Some(element) = dom.query(locator).await? {
                return Ok(element);
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::ElementNotFound {
                    locator: locator.clone(),
                    waited: start.elapsed(),
                });
            }
            trace!(target = "authflow", %locator, "not present yet, polling again");
            sleep(self.interval).await;
        }
    }

    /// Poll until an element matching `locator` is displayed and enabled.
    ///
    /// Obscured-element failures are left to the automation API at
    /// interaction time. On timeout the failure distinguishes an element
    /// that was never located ([`Error::ElementNotFound`]) from one that was
    /// located but never ready ([`Error::ElementNotInteractable`]).
    pub async fn for_interactable<D: Dom>(&self, dom: &D, locator: &Locator) -> Result<D::Element> {
        let start = Instant::now();
        let mut located = false;
        loop {
            if let Some(element) = dom.query(locator).await? {
                located = true;
                if element.displayed().await? && element.enabled().await? {
                    return Ok(element);
                }
            }
            if start.elapsed() >= self.timeout {
                let waited = start.elapsed();
                let locator = locator.clone();
                return Err(if located {
                    Error::ElementNotInteractable { locator, waited }
                } else {
                    Error::ElementNotFound { locator, waited }
                });
            }
            trace!(target = "authflow", %locator, "not interactable yet, polling again");
            sleep(self.interval).await;
        }
    }
}
