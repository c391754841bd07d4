//! Mocked authentication boundary.
//!
//! There is no backend; credentials are checked for shape only and
//! resolve to seeded demo profiles. A handful of fixed accounts exist so
//! every role can be exercised; any other well-formed credential pair
//! signs in as the default demo learner.

use crate::domain::{DomainError, DomainResult, Session, User, UserRole};

/// Minimum accepted password length, matching the registration form
/// rules.
pub const MIN_PASSWORD_LEN: usize = 8;

pub struct MockAuthService;

impl MockAuthService {
    /// Simulates a sign-in. Well-formed credentials always succeed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmail`] for an email without '@',
    /// and [`DomainError::InvalidCredentials`] for a password shorter
    /// than [`MIN_PASSWORD_LEN`].
    pub fn authenticate(email: &str, password: &str) -> DomainResult<Session> {
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::InvalidEmail(email.to_string()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::InvalidCredentials);
        }

        let user = Self::demo_account(email).unwrap_or_else(|| Self::default_learner(email));
        let token = format!("demo-token-{}", user.id);
        Ok(Session { user, token })
    }

    /// Simulates account creation with the registration form's
    /// validation rules. New learners start at xp 0, level 1, no badges.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation: missing name, malformed
    /// email, short password, or mismatched confirmation.
    pub fn register(
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
        role: UserRole,
    ) -> DomainResult<Session> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingName);
        }
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::InvalidEmail(email.to_string()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if password != confirm {
            return Err(DomainError::PasswordMismatch);
        }

        let id = email.split('@').next().unwrap_or("user").to_string();
        let token = format!("demo-token-{}", id);
        let user = User {
            id,
            email: email.to_string(),
            name: name.trim().to_string(),
            role,
            avatar: String::new(),
            xp: 0,
            level: 1,
            badges: Vec::new(),
        };
        Ok(Session { user, token })
    }

    /// One fixed account per role, keyed by email.
    fn demo_account(email: &str) -> Option<User> {
        let (id, name, role, xp, level, badges): (&str, &str, UserRole, u32, u32, &[&str]) =
            match email {
                "learner@maieutica.app" => (
                    "learner-1",
                    "Alex Kim",
                    UserRole::Learner,
                    420,
                    3,
                    &["first-lesson", "week-streak"],
                ),
                "teacher@maieutica.app" => {
                    ("teacher-1", "Sarah Chen", UserRole::Teacher, 0, 1, &[])
                }
                "parent@maieutica.app" => ("parent-1", "Lisa Chen", UserRole::Parent, 0, 1, &[]),
                "admin@maieutica.app" => ("admin-1", "Sam Rivera", UserRole::Admin, 0, 1, &[]),
                _ => return None,
            };
        Some(User {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            avatar: String::new(),
            xp,
            level,
            badges: badges.iter().map(|b| b.to_string()).collect(),
        })
    }

    fn default_learner(email: &str) -> User {
        User {
            id: "demo-1".to_string(),
            email: email.to_string(),
            name: "Demo User".to_string(),
            role: UserRole::Learner,
            avatar: String::new(),
            xp: 750,
            level: 3,
            badges: vec!["first-lesson".to_string(), "week-streak".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_accepts_any_well_formed_credentials() {
        let session = MockAuthService::authenticate("anyone@example.com", "password1").unwrap();
        assert_eq!(session.user.role, UserRole::Learner);
        assert_eq!(session.user.name, "Demo User");
        assert!(session.token.starts_with("demo-token-"));
    }

    #[test]
    fn test_authenticate_resolves_demo_roles() {
        let teacher = MockAuthService::authenticate("teacher@maieutica.app", "password1").unwrap();
        assert_eq!(teacher.user.role, UserRole::Teacher);

        let admin = MockAuthService::authenticate("admin@maieutica.app", "password1").unwrap();
        assert_eq!(admin.user.role, UserRole::Admin);
    }

    #[test]
    fn test_authenticate_rejects_short_password() {
        let err = MockAuthService::authenticate("a@b.c", "short").unwrap_err();
        assert_eq!(err, DomainError::InvalidCredentials);
    }

    #[test]
    fn test_authenticate_rejects_malformed_email() {
        let err = MockAuthService::authenticate("not-an-email", "password1").unwrap_err();
        assert!(matches!(err, DomainError::InvalidEmail(_)));
    }

    #[test]
    fn test_register_creates_fresh_learner() {
        let session = MockAuthService::register(
            "Jamie Doe",
            "jamie@example.com",
            "password1",
            "password1",
            UserRole::Learner,
        )
        .unwrap();

        assert_eq!(session.user.name, "Jamie Doe");
        assert_eq!(session.user.xp, 0);
        assert_eq!(session.user.level, 1);
        assert!(session.user.badges.is_empty());
    }

    #[test]
    fn test_register_rejects_mismatched_confirmation() {
        let err = MockAuthService::register(
            "Jamie Doe",
            "jamie@example.com",
            "password1",
            "password2",
            UserRole::Learner,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::PasswordMismatch);
    }

    #[test]
    fn test_register_rejects_missing_name() {
        let err = MockAuthService::register(
            "   ",
            "jamie@example.com",
            "password1",
            "password1",
            UserRole::Learner,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::MissingName);
    }

    #[test]
    fn test_register_rejects_short_password() {
        let err = MockAuthService::register(
            "Jamie Doe",
            "jamie@example.com",
            "pass",
            "pass",
            UserRole::Learner,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
}
