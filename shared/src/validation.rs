use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("username regex")
});

// Function names allow letters (any script), digits, spaces and a few
// separators, capped at 64 characters.
static FUNCTION_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N} _.\-]{1,64}$").expect("function name regex")
});

pub fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username_chars"))
    }
}

pub fn validate_function_name(name: &str) -> Result<(), ValidationError> {
    if FUNCTION_NAME_RE.is_match(name.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_function_name"))
    }
}

/// First human-readable message out of a failed `validate()` call, for the
/// form feedback banner.
pub fn first_error_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        value: String,
    }

    #[test]
    fn first_error_message_surfaces_the_attribute_message() {
        let probe = Probe { value: "x".to_string() };
        let errors = probe.validate().unwrap_err();
        assert_eq!(first_error_message(&errors), "too short");
    }

    #[test]
    fn usernames_allow_alphanumerics_and_underscore() {
        assert!(validate_username_chars("anna_42").is_ok());
        assert!(validate_username_chars("anna!").is_err());
        assert!(validate_username_chars("анна").is_err());
    }

    #[test]
    fn function_names_allow_unicode_letters() {
        assert!(validate_function_name("Синус от 0 до 2pi").is_ok());
        assert!(validate_function_name("sqr_1.5-test").is_ok());
        assert!(validate_function_name("").is_err());
        assert!(validate_function_name(&"x".repeat(65)).is_err());
        assert!(validate_function_name("bad{name}").is_err());
    }
}
