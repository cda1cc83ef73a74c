//! Client-side validation run before any network call.
//!
//! Mirrors the backend's signup policy (at least 8 characters including a
//! digit) so obviously bad input never leaves the page. Errors are the
//! inline strings the forms display.

/// Both fields must be non-empty after trimming.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err("Username and password are required.".to_string());
    }
    Ok(())
}

/// Signup: credential check plus password policy and confirmation match.
pub fn validate_signup(username: &str, password: &str, confirm: &str) -> Result<(), String> {
    validate_credentials(username, password)?;
    if password.len() < 8 || !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must be at least 8 characters and include a number.".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_whitespace_credentials_rejected() {
        assert!(validate_credentials("", "secret123").is_err());
        assert!(validate_credentials("alice", "").is_err());
        assert!(validate_credentials("   ", "secret123").is_err());
        assert!(validate_credentials("alice", "   ").is_err());
        assert!(validate_credentials("alice", "secret123").is_ok());
    }

    #[test]
    fn signup_enforces_password_policy() {
        // Too short.
        assert!(validate_signup("alice", "pass1", "pass1").is_err());
        // Long enough but no digit.
        assert!(validate_signup("alice", "passwords", "passwords").is_err());
        // Meets the policy.
        assert!(validate_signup("alice", "pass1234", "pass1234").is_ok());
    }

    #[test]
    fn signup_requires_matching_confirmation() {
        assert!(validate_signup("alice", "pass1234", "pass12345").is_err());
        assert!(validate_signup("alice", "pass1234", "").is_err());
    }
}
