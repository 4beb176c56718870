use std::time::Duration;

use thiserror::Error;

use crate::locator::Locator;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("browser session could not be established: {0}")]
    BrowserConnect(String),

    #[error("navigation failed: {url}")]
    Navigation {
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    /// The wait deadline passed without the locator ever matching.
    #[error("element not found after {ms}ms: {locator}", ms = .waited.as_millis())]
    ElementNotFound { locator: Locator, waited: Duration },

    /// The locator matched, but the element never became displayed and enabled.
    #[error("element not interactable after {ms}ms: {locator}", ms = .waited.as_millis())]
    ElementNotInteractable { locator: Locator, waited: Duration },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Any other automation failure (stale element, unexpected page state)
    /// propagates unchanged from the WebDriver client.
    #[error(transparent)]
    WebDriver(#[from] fantoccini::error::CmdError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_locator_and_elapsed() {
        let err = Error::ElementNotFound {
            locator: Locator::css("#missing"),
            waited: Duration::from_millis(10_250),
        };
        let msg = err.to_string();
        assert!(msg.contains("10250ms"), "unexpected message: {msg}");
        assert!(msg.contains("#missing"), "unexpected message: {msg}");
    }

    #[test]
    fn not_interactable_is_distinct_from_not_found() {
        let err = Error::ElementNotInteractable {
            locator: Locator::xpath("//button"),
            waited: Duration::from_secs(10),
        };
        assert!(err.to_string().contains("not interactable"));
    }
}
