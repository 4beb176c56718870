//! End-to-end scenarios for the auth frontend's signup/login form.
//!
//! The integration tests under `tests/` drive a real browser against the
//! frontend through the `authflow` harness. Each scenario opens its own
//! browser session, walks one user flow, and closes the session regardless
//! of outcome.
//!
//! Scenarios are gated on the `AUTHFLOW_E2E` environment variable: without a
//! running WebDriver server and frontend the fixture reports "skip" and the
//! suite passes vacuously. Point the suite at an environment with `BASE_URL`
//! and `WEBDRIVER_URL`.

pub mod contract;
pub mod fixture;
pub mod forms;
pub mod logging;
pub mod pages;

pub use fixture::TestEnvironment;
pub use forms::SignupDetails;
pub use logging::init_logging;
pub use pages::AuthPage;
