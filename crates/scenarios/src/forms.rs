//! Form data for signup attempts.

use rand::random;

/// One signup attempt's field values. Unset fields are left untouched in the
/// form, which is how the missing-field scenarios are expressed.
#[derive(Debug, Clone)]
pub struct SignupDetails {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl SignupDetails {
    /// Well-formed values for every field, with a freshly generated email so
    /// repeated runs do not collide on the application's uniqueness
    /// constraint.
    pub fn valid() -> Self {
        Self {
            name: Some("Test User".into()),
            date_of_birth: Some("01011990".into()),
            gender: Some("Male".into()),
            email: Some(unique_email()),
            password: Some("Password123!".into()),
            phone: Some("1234567890".into()),
            address: Some("123 Test St".into()),
        }
    }

    /// Only email and password, leaving every other required field empty.
    pub fn credentials_only(email: &str, password: &str) -> Self {
        Self {
            name: None,
            date_of_birth: None,
            gender: None,
            email: Some(email.into()),
            password: Some(password.into()),
            phone: None,
            address: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn without_phone(mut self) -> Self {
        self.phone = None;
        self
    }

    pub fn without_address(mut self) -> Self {
        self.address = None;
        self
    }
}

/// A throwaway address unique to this process run.
pub fn unique_email() -> String {
    format!("test-{:08x}@example.com", random::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_details_populate_every_field() {
        let details = SignupDetails::valid();
        assert!(details.name.is_some());
        assert!(details.date_of_birth.is_some());
        assert!(details.gender.is_some());
        assert!(details.email.is_some());
        assert!(details.password.is_some());
        assert!(details.phone.is_some());
        assert!(details.address.is_some());
    }

    #[test]
    fn generated_emails_are_distinct() {
        let first = unique_email();
        let second = unique_email();
        assert_ne!(first, second);
        assert!(first.ends_with("@example.com"));
    }

    #[test]
    fn variants_drop_the_right_fields() {
        let details = SignupDetails::valid().without_phone().without_address();
        assert!(details.phone.is_none());
        assert!(details.address.is_none());
        assert!(details.email.is_some());

        let sparse = SignupDetails::credentials_only("a@b.com", "pw");
        assert!(sparse.name.is_none());
        assert_eq!(sparse.email.as_deref(), Some("a@b.com"));
    }
}
