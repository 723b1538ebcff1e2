use crate::models::UserCreate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name must be a string")]
    NameNotString,
    #[error("Invalid email format")]
    InvalidEmail,
}

/// Simple shape check: `local@domain.tld` with an alphabetic TLD of two or
/// more characters. Consecutive dots and unicode are not handled.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate a raw creation payload.
///
/// The name is checked before the email, so a record with both problems
/// only reports the name error. On success the typed `UserCreate` is
/// returned for the repository.
pub fn validate_user_data(record: &Map<String, Value>) -> Result<UserCreate, ValidationError> {
    let name = match record.get("name") {
        None => return Err(ValidationError::EmptyName),
        Some(value) if is_falsy(value) => return Err(ValidationError::EmptyName),
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(ValidationError::NameNotString),
    };

    let email = match record.get("email") {
        Some(Value::String(email)) if validate_email(email) => email.clone(),
        _ => return Err(ValidationError::InvalidEmail),
    };

    Ok(UserCreate { name, email })
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_validate_email_accepts_common_shapes() {
        for email in [
            "test@example.com",
            "first.last@sub.example.org",
            "jhiver+test@gmail.com",
            "user_%-x@host-name.io",
            "a@b.co",
        ] {
            assert!(validate_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        for email in [
            "",
            "not-an-email",
            "missing-at.example.com",
            "user@nodot",
            "user@example.c",
            "user@example.c0m",
            "@example.com",
            "user@.com",
            "user name@example.com",
            " user@example.com",
            "user@example.com ",
            "üser@example.com",
        ] {
            assert!(!validate_email(email), "{:?} should be invalid", email);
        }
    }

    #[test]
    fn test_validate_email_is_permissive_about_dots() {
        // No consecutive-dot check by design of the pattern
        assert!(validate_email("a..b@example..com"));
    }

    #[test]
    fn test_validate_user_data_success() {
        let result = validate_user_data(&record(json!({
            "name": "Test User",
            "email": "test@example.com"
        })));

        assert_eq!(
            result,
            Ok(UserCreate {
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_user_data_empty_name() {
        let result = validate_user_data(&record(json!({"name": "", "email": "test@example.com"})));
        assert_eq!(result, Err(ValidationError::EmptyName));
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Name cannot be empty"
        );
    }

    #[test]
    fn test_validate_user_data_falsy_names() {
        for name in [json!(null), json!(false), json!(0), json!([]), json!({})] {
            let result =
                validate_user_data(&record(json!({"name": name, "email": "test@example.com"})));
            assert_eq!(result, Err(ValidationError::EmptyName));
        }
    }

    #[test]
    fn test_validate_user_data_non_string_name() {
        let result = validate_user_data(&record(json!({"name": 42, "email": "test@example.com"})));
        assert_eq!(result, Err(ValidationError::NameNotString));
    }

    #[test]
    fn test_validate_user_data_missing_name() {
        let result = validate_user_data(&record(json!({"email": "test@example.com"})));
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_user_data_invalid_email() {
        for email in [json!("not-an-email"), json!(null), json!(5)] {
            let result = validate_user_data(&record(json!({"name": "Test", "email": email})));
            assert_eq!(result, Err(ValidationError::InvalidEmail));
        }

        let missing = validate_user_data(&record(json!({"name": "Test"})));
        assert_eq!(missing, Err(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
    }

    #[test]
    fn test_validate_user_data_reports_name_first() {
        let result = validate_user_data(&record(json!({"name": "", "email": "bad"})));
        assert_eq!(result, Err(ValidationError::EmptyName));
    }
}
