use regex::Regex;
use tracing::info;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::gateway::Gateway;
use crate::store::session::SessionManager;

/// Local credential checks, run before anything goes over the wire
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("all fields are required")]
    MissingField,
    #[error("password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Error type for auth flows
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] CredentialError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Input for the registration flow
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

fn email_is_valid(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

pub fn validate_registration(form: &RegisterForm) -> Result<(), CredentialError> {
    if form.first_name.trim().is_empty()
        || form.last_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.trim().is_empty()
    {
        return Err(CredentialError::MissingField);
    }
    if form.password.len() < 6 {
        return Err(CredentialError::PasswordTooShort);
    }
    if !email_is_valid(&form.email) {
        return Err(CredentialError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), CredentialError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(CredentialError::MissingField);
    }
    Ok(())
}

/// Sign in and hand the confirmed user to the session manager.
/// The session cookie lands in the gateway's cookie store.
pub async fn login(
    gateway: &dyn Gateway,
    session: &mut SessionManager,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    validate_login(email, password)?;
    let user = endpoints::login(gateway, email, password).await?;
    info!(user = %user.id, "logged in");
    session.set_authenticated(user, true);
    Ok(())
}

/// Create an account. Returns the server-issued user ID; the caller still
/// has to log in (the server does not start a session on registration).
pub async fn register(gateway: &dyn Gateway, form: &RegisterForm) -> Result<String, AuthError> {
    validate_registration(form)?;
    let username = format!("{} {}", form.first_name.trim(), form.last_name.trim());
    let user_id = endpoints::register(gateway, &username, form.email.trim(), &form.password).await?;
    info!(user = %user_id, "registered");
    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            password: "hunter22".into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert_eq!(validate_registration(&valid_form()), Ok(()));
    }

    #[test]
    fn blank_fields_rejected() {
        for field in ["first_name", "last_name", "email", "password"] {
            let mut form = valid_form();
            match field {
                "first_name" => form.first_name = "  ".into(),
                "last_name" => form.last_name = String::new(),
                "email" => form.email = String::new(),
                _ => form.password = String::new(),
            }
            assert_eq!(
                validate_registration(&form),
                Err(CredentialError::MissingField),
                "field: {field}"
            );
        }
    }

    #[test]
    fn short_password_rejected() {
        let mut form = valid_form();
        form.password = "12345".into();
        assert_eq!(
            validate_registration(&form),
            Err(CredentialError::PasswordTooShort)
        );
    }

    #[test]
    fn malformed_email_rejected() {
        for email in ["no-at-sign", "two@@example.com ", "user@nodot", "a b@c.com"] {
            let mut form = valid_form();
            form.email = email.into();
            assert_eq!(
                validate_registration(&form),
                Err(CredentialError::InvalidEmail),
                "email: {email}"
            );
        }
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(validate_login("", "pw"), Err(CredentialError::MissingField));
        assert_eq!(
            validate_login("john@example.com", " "),
            Err(CredentialError::MissingField)
        );
        assert_eq!(validate_login("john@example.com", "pw"), Ok(()));
    }
}
