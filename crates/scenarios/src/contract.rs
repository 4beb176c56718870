//! Locators the suite relies on.
//!
//! These are the de facto contract with the application's markup: any change
//! to the frontend that breaks one of them is a breaking interface change
//! for this suite, not a flake.

use authflow::Locator;

/// Heading shown in the default (signup) view.
pub fn signup_heading() -> Locator {
    Locator::text_contains("p", "Create Account")
}

/// Heading shown once the login view is active.
pub fn login_heading() -> Locator {
    Locator::text_contains("p", "Login")
}

/// Control that switches from the signup view to the login view.
pub fn login_toggle() -> Locator {
    Locator::text_contains("span", "Login here")
}

pub fn signup_submit() -> Locator {
    Locator::button_with_text("Create Account")
}

pub fn login_submit() -> Locator {
    Locator::button_with_text("Login")
}

pub fn name_input() -> Locator {
    Locator::input_with_type("text")
}

pub fn date_of_birth_input() -> Locator {
    Locator::input_with_type("date")
}

pub fn gender_select() -> Locator {
    Locator::xpath("//select")
}

pub fn email_input() -> Locator {
    Locator::input_with_type("email")
}

pub fn password_input() -> Locator {
    Locator::input_with_type("password")
}

pub fn phone_input() -> Locator {
    Locator::input_with_type("number")
}

pub fn address_input() -> Locator {
    Locator::input_with_placeholder("Address")
}

/// Every control the signup view must expose exactly once.
pub fn signup_controls() -> Vec<(&'static str, Locator)> {
    vec![
        ("name input", name_input()),
        ("date of birth input", date_of_birth_input()),
        ("gender select", gender_select()),
        ("email input", email_input()),
        ("password input", password_input()),
        ("phone input", phone_input()),
        ("address input", address_input()),
        ("signup submit", signup_submit()),
    ]
}

/// Every control the login view must expose exactly once.
pub fn login_controls() -> Vec<(&'static str, Locator)> {
    vec![
        ("email input", email_input()),
        ("password input", password_input()),
        ("login submit", login_submit()),
    ]
}
