//! authflow: browser-driving harness for end-to-end auth UI tests
//!
//! This crate provides the reusable layer under the scenario suite: suite
//! configuration resolved from the environment, a WebDriver-backed browser
//! [`Session`], owned [`Locator`] values, and the explicit [`Wait`] helper
//! that polls the DOM instead of sleeping for fixed durations.
//!
//! # Examples
//!
//! ## Waiting for a control and clicking it
//!
//! ```ignore
//! use authflow::{Locator, Session, SuiteConfig, Wait};
//!
//! #[tokio::main]
//! async fn main() -> authflow::Result<()> {
//!     let config = SuiteConfig::from_env()?;
//!     let session = Session::connect(&config).await?;
//!
//!     session.goto(&config.auth_url()).await?;
//!
//!     // Poll until the submit control is present, displayed, and enabled,
//!     // then act on the returned handle.
//!     let wait = Wait::default();
//!     let submit = wait
//!         .for_interactable(&session, &Locator::button_with_text("Login"))
//!         .await?;
//!     submit.click().await?;
//!
//!     session.close().await
//! }
//! ```
//!
//! ## Driving the wait helper against a scripted DOM
//!
//! ```ignore
//! use authflow::testing::MockDom;
//! use authflow::{Locator, Wait};
//!
//! #[tokio::test(start_paused = true)]
//! async fn banner_appears_late() {
//!     let dom = MockDom::new();
//!     let banner = Locator::css(".banner");
//!     dom.set_present_after(&banner, 4);
//!
//!     Wait::default().for_present(&dom, &banner).await.unwrap();
//!     assert_eq!(dom.polls(&banner), 5);
//! }
//! ```

pub mod config;
pub mod error;
pub mod locator;
pub mod session;
pub mod testing;
pub mod wait;

pub use config::SuiteConfig;
pub use error::{Error, Result};
pub use locator::{Locator, Strategy};
pub use session::Session;
pub use wait::{Dom, DomElement, Wait};
