use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{2,63}$").expect("Failed to compile username regex")
});

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !USERNAME_REGEX.is_match(&self.username) {
            return Err("Invalid username format".to_string());
        }
        if self.password.len() < 8 {
            return Err("Password must be at least 8 characters".to_string());
        }
        if self.password.len() > 512 {
            return Err("Password too long".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !USERNAME_REGEX.is_match(&self.username) {
            return Err("Invalid username format".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(username: &str, password: &str, confirm: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_signup_request_valid() {
        let request = signup("alice", "password123", "password123");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_signup_request_invalid_username() {
        for username in ["", "ab", ".dot-first", "has spaces", "way!bad?chars"] {
            let request = signup(username, "password123", "password123");
            assert!(request.validate().is_err(), "accepted {username:?}");
        }
    }

    #[test]
    fn test_signup_request_password_too_short() {
        let request = signup("alice", "short", "short");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_request_mismatch_passes_validate() {
        // Mismatched confirmation is checked by the handler, not here, so the
        // duplicate-user check can run first.
        let request = signup("alice", "password123", "password456");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_valid() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "any_password".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_invalid_username() {
        let request = LoginRequest {
            username: "no spaces allowed".to_string(),
            password: "password".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
