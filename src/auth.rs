//! Thin façade over the hosted auth collaborator: outcome-to-message mapping,
//! form validation, and the saved-form cache. The provider itself stays behind
//! a trait; only success/failure and an error-kind tag cross the seam.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entity::{EducationLevel, UserProfile};
use crate::error::{Result, StudydeskError};

const FORM_CACHE_FILE: &str = "form_data.json";

/// Error-kind tags reported by the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorCode {
    UserNotFound,
    WrongPassword,
    InvalidEmail,
    WeakPassword,
    EmailAlreadyInUse,
    TooManyRequests,
    PopupClosedByUser,
    CancelledPopupRequest,
    Unknown,
}

impl AuthErrorCode {
    /// Parse a provider code string; unrecognized codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/user-not-found" => AuthErrorCode::UserNotFound,
            "auth/wrong-password" => AuthErrorCode::WrongPassword,
            "auth/invalid-email" => AuthErrorCode::InvalidEmail,
            "auth/weak-password" => AuthErrorCode::WeakPassword,
            "auth/email-already-in-use" => AuthErrorCode::EmailAlreadyInUse,
            "auth/too-many-requests" => AuthErrorCode::TooManyRequests,
            "auth/popup-closed-by-user" => AuthErrorCode::PopupClosedByUser,
            "auth/cancelled-popup-request" => AuthErrorCode::CancelledPopupRequest,
            _ => AuthErrorCode::Unknown,
        }
    }

    /// Fixed human-readable message for inline display.
    pub fn message(&self) -> &'static str {
        match self {
            AuthErrorCode::UserNotFound => "No account found with this email address.",
            AuthErrorCode::WrongPassword => "Incorrect password. Please try again.",
            AuthErrorCode::InvalidEmail => "Invalid email address format.",
            AuthErrorCode::WeakPassword => {
                "Password is too weak. Please choose a stronger password."
            }
            AuthErrorCode::EmailAlreadyInUse => "An account with this email already exists.",
            AuthErrorCode::TooManyRequests => "Too many failed attempts. Please try again later.",
            AuthErrorCode::PopupClosedByUser => "Sign-in popup was closed. Please try again.",
            AuthErrorCode::CancelledPopupRequest => "Sign-in was cancelled.",
            AuthErrorCode::Unknown => "An error occurred during authentication.",
        }
    }
}

/// The hosted auth collaborator. Implementations translate provider failures
/// into code strings understood by `AuthErrorCode::from_code`.
pub trait AuthProvider {
    fn sign_in(&mut self, email: &str, password: &str) -> std::result::Result<(), String>;
    fn sign_up(&mut self, email: &str, password: &str) -> std::result::Result<(), String>;
    fn sign_out(&mut self) -> std::result::Result<(), String>;
}

/// Outcome of a gateway operation, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    SignedIn,
    SignedUp,
    SignedOut,
    /// Inline message; never fatal.
    Failed(String),
}

/// Validates forms and drives the provider, translating outcomes into UI
/// transitions.
pub struct AuthGateway<P: AuthProvider> {
    provider: P,
}

impl<P: AuthProvider> AuthGateway<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn login(&mut self, email: &str, password: &str) -> AuthOutcome {
        if let Err(e) = validate_login(email, password) {
            return AuthOutcome::Failed(e.to_string());
        }
        match self.provider.sign_in(email, password) {
            Ok(()) => AuthOutcome::SignedIn,
            Err(code) => AuthOutcome::Failed(AuthErrorCode::from_code(&code).message().to_string()),
        }
    }

    pub fn signup(&mut self, form: &SignupForm) -> AuthOutcome {
        if let Err(e) = form.validate() {
            return AuthOutcome::Failed(e.to_string());
        }
        match self.provider.sign_up(&form.email, &form.password) {
            Ok(()) => AuthOutcome::SignedUp,
            Err(code) => AuthOutcome::Failed(AuthErrorCode::from_code(&code).message().to_string()),
        }
    }

    pub fn logout(&mut self) -> AuthOutcome {
        match self.provider.sign_out() {
            Ok(()) => AuthOutcome::SignedOut,
            Err(code) => AuthOutcome::Failed(AuthErrorCode::from_code(&code).message().to_string()),
        }
    }
}

/// Signup form fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub education_level: Option<EducationLevel>,
    pub terms_accepted: bool,
    pub newsletter: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<()> {
        if self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
            || self.education_level.is_none()
        {
            return Err(validation("Please fill in all required fields."));
        }
        if !is_valid_email(&self.email) {
            return Err(validation("Please enter a valid email address."));
        }
        if self.password.len() < 8 {
            return Err(validation("Password must be at least 8 characters long."));
        }
        if self.password != self.confirm_password {
            return Err(validation("Passwords do not match."));
        }
        if !self.terms_accepted {
            return Err(validation("Please accept the terms of service."));
        }
        Ok(())
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.is_empty() || password.is_empty() {
        return Err(validation("Please fill in all required fields."));
    }
    if !is_valid_email(email) {
        return Err(validation("Please enter a valid email address."));
    }
    Ok(())
}

fn validation(msg: &str) -> StudydeskError {
    StudydeskError::Validation(msg.to_string())
}

/// Loose shape check: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }
}

/// Score one point each for length >= 8, a lowercase letter, an uppercase
/// letter, a digit, and a symbol.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0;
    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    match score {
        0 | 1 => PasswordStrength::VeryWeak,
        2 => PasswordStrength::Weak,
        3 => PasswordStrength::Fair,
        4 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    }
}

/// Cached form values restored on the next visit. Read/write failures are
/// logged and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedFormData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub remember_me: bool,
    #[serde(default)]
    pub newsletter: bool,
}

pub struct FormCache {
    path: PathBuf,
}

impl FormCache {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(FORM_CACHE_FILE),
        }
    }

    /// Cached values, or empty defaults when the cache is absent or corrupt.
    pub fn load(&self) -> SavedFormData {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "form cache corrupt, using defaults");
                SavedFormData::default()
            }),
            Err(_) => SavedFormData::default(),
        }
    }

    pub fn store(&self, data: &SavedFormData) {
        let result = serde_json::to_vec_pretty(data)
            .map_err(|e| e.to_string())
            .and_then(|bytes| fs::write(&self.path, bytes).map_err(|e| e.to_string()));
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "form cache write failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    Newsletter,
    RecentlyActive,
}

impl std::str::FromStr for UserFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(UserFilter::All),
            "newsletter" => Ok(UserFilter::Newsletter),
            "recent" | "recently-active" => Ok(UserFilter::RecentlyActive),
            _ => Err(format!("Invalid user filter: {}", s)),
        }
    }
}

/// Admin-view filtering over the user directory. Recently active means a last
/// login within the past 7 days.
pub fn filter_users<'a>(
    users: &'a [UserProfile],
    search: &str,
    filter: UserFilter,
    now: DateTime<Utc>,
) -> Vec<&'a UserProfile> {
    let search = search.trim().to_lowercase();
    let week_ago = now - Duration::days(7);

    users
        .iter()
        .filter(|user| {
            search.is_empty()
                || user.first_name.to_lowercase().contains(&search)
                || user.last_name.to_lowercase().contains(&search)
                || user.email.to_lowercase().contains(&search)
        })
        .filter(|user| match filter {
            UserFilter::All => true,
            UserFilter::Newsletter => user.newsletter,
            UserFilter::RecentlyActive => user.last_login.is_some_and(|t| t > week_ago),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeProvider {
        fail_with: Option<&'static str>,
    }

    impl AuthProvider for FakeProvider {
        fn sign_in(&mut self, _email: &str, _password: &str) -> std::result::Result<(), String> {
            match self.fail_with {
                Some(code) => Err(code.to_string()),
                None => Ok(()),
            }
        }

        fn sign_up(&mut self, _email: &str, _password: &str) -> std::result::Result<(), String> {
            match self.fail_with {
                Some(code) => Err(code.to_string()),
                None => Ok(()),
            }
        }

        fn sign_out(&mut self) -> std::result::Result<(), String> {
            Ok(())
        }
    }

    fn user(first: &str, newsletter: bool, last_login_days_ago: Option<i64>) -> UserProfile {
        let now = Utc::now();
        UserProfile {
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            education_level: EducationLevel::Bachelors,
            newsletter,
            created_at: now - Duration::days(90),
            last_login: last_login_days_ago.map(|d| now - Duration::days(d)),
        }
    }

    #[test]
    fn test_error_code_messages() {
        assert_eq!(
            AuthErrorCode::from_code("auth/user-not-found").message(),
            "No account found with this email address."
        );
        assert_eq!(
            AuthErrorCode::from_code("auth/wrong-password").message(),
            "Incorrect password. Please try again."
        );
        assert_eq!(
            AuthErrorCode::from_code("auth/some-future-code").message(),
            "An error occurred during authentication."
        );
    }

    #[test]
    fn test_login_maps_provider_error_to_message() {
        let mut gateway = AuthGateway::new(FakeProvider {
            fail_with: Some("auth/too-many-requests"),
        });
        let outcome = gateway.login("a@b.com", "secret123");
        assert_eq!(
            outcome,
            AuthOutcome::Failed("Too many failed attempts. Please try again later.".to_string())
        );
    }

    #[test]
    fn test_login_validation_blocks_provider_call() {
        let mut gateway = AuthGateway::new(FakeProvider { fail_with: None });
        let outcome = gateway.login("not-an-email", "secret123");
        assert_eq!(
            outcome,
            AuthOutcome::Failed("Please enter a valid email address.".to_string())
        );
    }

    #[test]
    fn test_signup_validation() {
        let mut form = SignupForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Str0ng!pass".to_string(),
            confirm_password: "Str0ng!pass".to_string(),
            education_level: Some(EducationLevel::Phd),
            terms_accepted: true,
            newsletter: false,
        };
        assert!(form.validate().is_ok());

        form.confirm_password = "different".to_string();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Passwords do not match."
        );

        form.confirm_password = form.password.clone();
        form.terms_accepted = false;
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please accept the terms of service."
        );

        form.terms_accepted = true;
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Password must be at least 8 characters long."
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_password_strength_boundaries() {
        assert_eq!(password_strength(""), PasswordStrength::VeryWeak);
        assert_eq!(password_strength("abc"), PasswordStrength::VeryWeak);
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::Weak);
        assert_eq!(password_strength("Abcdefgh"), PasswordStrength::Fair);
        assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Good);
        assert_eq!(password_strength("Abcdef1!"), PasswordStrength::Strong);
    }

    #[test]
    fn test_form_cache_round_trip_and_corruption() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cache = FormCache::open(tmp.path());
        assert_eq!(cache.load(), SavedFormData::default());

        let data = SavedFormData {
            email: "ada@example.com".to_string(),
            remember_me: true,
            newsletter: false,
        };
        cache.store(&data);
        assert_eq!(cache.load(), data);

        fs::write(tmp.path().join(FORM_CACHE_FILE), b"garbage").unwrap();
        assert_eq!(cache.load(), SavedFormData::default());
    }

    #[test]
    fn test_recently_active_window() {
        let now = Utc::now();
        let users = vec![
            user("Fresh", false, Some(2)),
            user("Stale", false, Some(10)),
            user("Never", false, None),
        ];

        let recent = filter_users(&users, "", UserFilter::RecentlyActive, now);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].first_name, "Fresh");
    }

    #[test]
    fn test_user_search_and_newsletter() {
        let now = Utc::now();
        let users = vec![user("Alice", true, None), user("Bob", false, None)];

        let hits = filter_users(&users, "alice", UserFilter::All, now);
        assert_eq!(hits.len(), 1);

        let subs = filter_users(&users, "", UserFilter::Newsletter, now);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].first_name, "Alice");
    }
}
