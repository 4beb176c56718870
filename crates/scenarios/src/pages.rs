//! Page flows for the auth view.
//!
//! The frontend serves a single view that boots in signup mode and swaps to
//! login mode in place. Every synchronization point here polls an observable
//! condition through the wait helper; there are no fixed sleeps.

use authflow::{Locator, Result, Session, Wait};
use tracing::info;

use crate::contract;
use crate::fixture::TestEnvironment;
use crate::forms::SignupDetails;

pub struct AuthPage<'a> {
    session: &'a Session,
    wait: Wait,
}

impl<'a> AuthPage<'a> {
    /// Navigate to the auth view and wait for the signup form, its default
    /// state, to render.
    pub async fn open(env: &'a TestEnvironment) -> Result<AuthPage<'a>> {
        let page = Self {
            session: &env.session,
            wait: Wait::default(),
        };

        let url = env.config.auth_url();
        info!(target = "authflow", %url, "opening auth view");
        page.session.goto(&url).await?;
        page.wait
            .for_present(page.session, &contract::signup_heading())
            .await?;
        Ok(page)
    }

    /// HTML source of the current view.
    pub async fn source(&self) -> Result<String> {
        self.session.source().await
    }

    /// Number of elements currently matching `locator`.
    pub async fn count(&self, locator: &Locator) -> Result<usize> {
        Ok(self.session.find_all(locator).await?.len())
    }

    /// Type the populated fields into the signup form, leaving unset ones
    /// untouched.
    pub async fn fill_signup(&self, details: &SignupDetails) -> Result<()> {
        info!(target = "authflow", "filling signup form");
        // The form renders asynchronously; anchor on its first control
        // before typing anywhere.
        self.wait
            .for_present(self.session, &contract::name_input())
            .await?;

        let fields = [
            (&details.name, contract::name_input()),
            (&details.date_of_birth, contract::date_of_birth_input()),
            (&details.gender, contract::gender_select()),
            (&details.email, contract::email_input()),
            (&details.password, contract::password_input()),
            (&details.phone, contract::phone_input()),
            (&details.address, contract::address_input()),
        ];
        for (value, locator) in fields {
            if let Some(value) = value {
                self.type_into(&locator, value).await?;
            }
        }
        Ok(())
    }

    /// Click the signup submit once it is interactable.
    pub async fn submit_signup(&self) -> Result<()> {
        info!(target = "authflow", "submitting signup form");
        let button = self
            .wait
            .for_interactable(self.session, &contract::signup_submit())
            .await?;
        button.click().await?;
        Ok(())
    }

    /// Switch to the login view and wait for it to render.
    pub async fn switch_to_login(&self) -> Result<()> {
        info!(target = "authflow", "switching to login view");
        let toggle = self
            .wait
            .for_interactable(self.session, &contract::login_toggle())
            .await?;
        toggle.click().await?;

        // The view swaps in place; poll for the login heading instead of
        // sleeping through the transition.
        self.wait
            .for_present(self.session, &contract::login_heading())
            .await?;
        Ok(())
    }

    /// Type credentials into the login form.
    pub async fn fill_login(&self, email: &str, password: &str) -> Result<()> {
        info!(target = "authflow", "filling login form");
        self.type_into(&contract::email_input(), email).await?;
        self.type_into(&contract::password_input(), password).await
    }

    /// Click the login submit once it is interactable.
    pub async fn submit_login(&self) -> Result<()> {
        info!(target = "authflow", "submitting login form");
        let button = self
            .wait
            .for_interactable(self.session, &contract::login_submit())
            .await?;
        button.click().await?;
        Ok(())
    }

    async fn type_into(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self.wait.for_present(self.session, locator).await?;
        element.send_keys(text).await?;
        Ok(())
    }
}
