use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("message is required")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Field checks for the contact form. Phone is optional, everything else is
/// required; the email only has to look like one.
pub fn validate_inquiry(inquiry: &ContactInquiry) -> Result<(), ContactError> {
    if inquiry.name.trim().is_empty() {
        return Err(ContactError::MissingName);
    }

    let email = inquiry.email.trim();
    if email.is_empty() {
        return Err(ContactError::MissingEmail);
    }
    if !looks_like_email(email) {
        return Err(ContactError::InvalidEmail);
    }

    if inquiry.message.trim().is_empty() {
        return Err(ContactError::MissingMessage);
    }

    Ok(())
}

/// There is no inquiry backend; a validated inquiry is acknowledged and
/// logged so support can be wired in later without touching the form.
pub fn record_inquiry(inquiry: &ContactInquiry) -> Result<(), ContactError> {
    validate_inquiry(inquiry)?;
    info!(
        "Contact inquiry from {} <{}>: {} chars",
        inquiry.name.trim(),
        inquiry.email.trim(),
        inquiry.message.trim().len()
    );
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Nour".to_string(),
            email: "nour@example.com".to_string(),
            phone: None,
            message: "How do I book a campaign across several billboards?".to_string(),
        }
    }

    #[test]
    fn a_complete_inquiry_passes() {
        assert_eq!(validate_inquiry(&inquiry()), Ok(()));
    }

    #[test]
    fn phone_is_optional() {
        let mut with_phone = inquiry();
        with_phone.phone = Some("+20 123 456 7890".to_string());
        assert_eq!(validate_inquiry(&with_phone), Ok(()));
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut missing_name = inquiry();
        missing_name.name = "   ".to_string();
        assert_eq!(validate_inquiry(&missing_name), Err(ContactError::MissingName));

        let mut missing_email = inquiry();
        missing_email.email = String::new();
        assert_eq!(
            validate_inquiry(&missing_email),
            Err(ContactError::MissingEmail)
        );

        let mut missing_message = inquiry();
        missing_message.message = "\n".to_string();
        assert_eq!(
            validate_inquiry(&missing_message),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn implausible_emails_are_rejected() {
        for email in ["plainaddress", "@nodomain.com", "user@nodot", "user@.com", "user@domain."] {
            let mut bad = inquiry();
            bad.email = email.to_string();
            assert_eq!(
                validate_inquiry(&bad),
                Err(ContactError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }
}
