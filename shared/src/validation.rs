//! Input validation functions
//!
//! Checks run on request input before anything reaches the database.

use std::sync::OnceLock;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;
/// Maximum accepted password length
pub const MAX_PASSWORD_LEN: usize = 128;
/// Maximum accepted username length
pub const MAX_USERNAME_LEN: usize = 50;
/// Leaderboard size when the client does not ask for one
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;
/// Largest leaderboard a client may request
pub const MAX_LEADERBOARD_LIMIT: i64 = 100;

fn email_regex() -> &'static regex_lite::Regex {
    static EMAIL_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email_regex().is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password length, counted in characters
///
/// The upper bound caps the input handed to the hasher.
pub fn validate_password(password: &str) -> Result<(), String> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Validate display name
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        ));
    }
    Ok(())
}

/// Resolve the requested leaderboard size, applying the default
pub fn validate_leaderboard_limit(limit: Option<i64>) -> Result<i64, String> {
    let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    if !(1..=MAX_LEADERBOARD_LIMIT).contains(&limit) {
        return Err(format!(
            "Limit must be between 1 and {}",
            MAX_LEADERBOARD_LIMIT
        ));
    }
    Ok(limit)
}

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "email" => "Email",
        "username" => "Username",
        "password" => "Password",
        "limit" => "Limit",
        "mode" => "Game Mode",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Validate every signup field, reporting the first failure
pub fn validate_signup(email: &str, username: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email).map_err(|msg| ValidationError::new("email", &msg))?;
    validate_username(username).map_err(|msg| ValidationError::new("username", &msg))?;
    validate_password(password).map_err(|msg| ValidationError::new("password", &msg))?;
    Ok(())
}
