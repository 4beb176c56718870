//! Test doubles for the wait helper.
//!
//! Provides a scripted DOM so the polling loop in [`crate::wait`] can be
//! exercised without spawning a browser. Each locator gets a timeline:
//! the poll on which it first matches, and the polls from which it reports
//! displayed/enabled. The mock also counts queries per locator so tests can
//! assert on the polling behavior itself.
//!
//! # Example
//!
//! ```ignore
//! use authflow::testing::MockDom;
//! use authflow::{Locator, Wait};
//!
//! #[tokio::test(start_paused = true)]
//! async fn submit_becomes_ready() {
//!     let dom = MockDom::new();
//!     let submit = Locator::button_with_text("Login");
//!     dom.set_interactable_after(&submit, 2);
//!
//!     Wait::default().for_interactable(&dom, &submit).await.unwrap();
//!     assert_eq!(dom.polls(&submit), 3);
//! }
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::locator::Locator;
use crate::wait::{Dom, DomElement};

/// Timeline for one scripted element, measured in polls (0-based).
#[derive(Debug, Clone, Copy)]
struct Timeline {
    /// Poll on which the element first matches.
    present_from: u32,
    /// Poll from which it reports displayed; `None` means never.
    displayed_from: Option<u32>,
    /// Poll from which it reports enabled; `None` means never.
    enabled_from: Option<u32>,
}

/// Scripted DOM implementing [`Dom`].
///
/// Locators without a script never match. All setters key on the locator's
/// display form, so equal locators share a timeline and a poll counter.
#[derive(Default)]
pub struct MockDom {
    timelines: Mutex<HashMap<String, Timeline>>,
    polls: Mutex<HashMap<String, u32>>,
}

impl MockDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element present, displayed, and enabled from the first poll.
    pub fn set_present(&self, locator: &Locator) {
        self.script(
            locator,
            Timeline {
                present_from: 0,
                displayed_from: Some(0),
                enabled_from: Some(0),
            },
        );
    }

    /// Element absent for the first `polls` queries, then fully ready.
    pub fn set_present_after(&self, locator: &Locator, polls: u32) {
        self.script(
            locator,
            Timeline {
                present_from: polls,
                displayed_from: Some(polls),
                enabled_from: Some(polls),
            },
        );
    }

    /// Element present immediately but never displayed.
    pub fn set_hidden(&self, locator: &Locator) {
        self.script(
            locator,
            Timeline {
                present_from: 0,
                displayed_from: None,
                enabled_from: Some(0),
            },
        );
    }

    /// Element present and displayed immediately but never enabled.
    pub fn set_disabled(&self, locator: &Locator) {
        self.script(
            locator,
            Timeline {
                present_from: 0,
                displayed_from: Some(0),
                enabled_from: None,
            },
        );
    }

    /// Element present from the first poll, displayed and enabled once
    /// `polls` queries have been made.
    pub fn set_interactable_after(&self, locator: &Locator, polls: u32) {
        self.script(
            locator,
            Timeline {
                present_from: 0,
                displayed_from: Some(polls),
                enabled_from: Some(polls),
            },
        );
    }

    /// Number of times `locator` has been queried.
    pub fn polls(&self, locator: &Locator) -> u32 {
        self.polls
            .lock()
            .unwrap()
            .get(&locator.to_string())
            .copied()
            .unwrap_or(0)
    }

    fn script(&self, locator: &Locator, timeline: Timeline) {
        self.timelines
            .lock()
            .unwrap()
            .insert(locator.to_string(), timeline);
    }
}

#[async_trait]
impl Dom for MockDom {
    type Element = MockElement;

    async fn query(&self, locator: &Locator) -> Result<Option<MockElement>> {
        let key = locator.to_string();

        let poll = {
            let mut polls = self.polls.lock().unwrap();
            let counter = polls.entry(key.clone()).or_insert(0);
            let current = *counter;
            *counter += 1;
            current
        };

        let timeline = self.timelines.lock().unwrap().get(&key).copied();
        Ok(timeline.and_then(|t| {
            (poll >= t.present_from).then(|| MockElement {
                displayed: t.displayed_from.is_some_and(|from| poll >= from),
                enabled: t.enabled_from.is_some_and(|from| poll >= from),
            })
        }))
    }
}

/// Element handle produced by [`MockDom`], frozen at query time.
#[derive(Debug, Clone, Copy)]
pub struct MockElement {
    displayed: bool,
    enabled: bool,
}

#[async_trait]
impl DomElement for MockElement {
    async fn displayed(&self) -> Result<bool> {
        Ok(self.displayed)
    }

    async fn enabled(&self) -> Result<bool> {
        Ok(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unscripted_locator_never_matches() {
        let dom = MockDom::new();
        let locator = Locator::css("#nothing");

        assert!(dom.query(&locator).await.unwrap().is_none());
        assert_eq!(dom.polls(&locator), 1);
    }

    #[tokio::test]
    async fn present_after_counts_polls() {
        let dom = MockDom::new();
        let locator = Locator::css("#late");
        dom.set_present_after(&locator, 2);

        assert!(dom.query(&locator).await.unwrap().is_none());
        assert!(dom.query(&locator).await.unwrap().is_none());
        let element = dom.query(&locator).await.unwrap().unwrap();
        assert!(element.displayed().await.unwrap());
        assert!(element.enabled().await.unwrap());
        assert_eq!(dom.polls(&locator), 3);
    }

    #[tokio::test]
    async fn hidden_element_matches_but_is_not_displayed() {
        let dom = MockDom::new();
        let locator = Locator::css("#hidden");
        dom.set_hidden(&locator);

        let element = dom.query(&locator).await.unwrap().unwrap();
        assert!(!element.displayed().await.unwrap());
        assert!(element.enabled().await.unwrap());
    }

    #[tokio::test]
    async fn disabled_element_is_displayed_but_not_enabled() {
        let dom = MockDom::new();
        let locator = Locator::css("#disabled");
        dom.set_disabled(&locator);

        let element = dom.query(&locator).await.unwrap().unwrap();
        assert!(element.displayed().await.unwrap());
        assert!(!element.enabled().await.unwrap());
    }
}
