use crate::domain::error::DomainError;
use crate::domain::repository::UserRepository;
use crate::domain::user::{LoginRequest, RegisterRequest, User};
use crate::infrastructure::security::{hash_password, issue_session_token, verify_password};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

pub const REGISTER_FIELDS_REQUIRED: &str = "All fields are required";
pub const LOGIN_FIELDS_REQUIRED: &str = "Please enter phone number and password";
pub const PHONE_ALREADY_REGISTERED: &str = "Phone number already registered";

/// A successfully authenticated user plus the session token minted for it.
#[derive(Debug)]
pub struct Session {
    pub user: User,
    pub token: String,
}

pub struct AuthService<R: UserRepository> {
    user_repository: Arc<R>,
    session_secret: String,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(user_repository: Arc<R>, session_secret: String) -> Self {
        Self {
            user_repository,
            session_secret,
        }
    }

    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    /// Registers a new user. Fields are trimmed before the presence check
    /// so whitespace-only input counts as empty; nothing is stored until
    /// every check has passed.
    #[instrument(skip(self, req), fields(phone = %req.phone))]
    pub async fn register(&self, req: RegisterRequest) -> Result<Session> {
        let name = req.name.trim();
        let phone = req.phone.trim();
        let password = req.password.trim();

        if name.is_empty() || phone.is_empty() || password.is_empty() {
            warn!("Registration rejected: missing required fields");
            return Err(DomainError::Validation(REGISTER_FIELDS_REQUIRED.to_string()).into());
        }

        if self
            .user_repository
            .find_user_by_phone(phone)
            .await?
            .is_some()
        {
            warn!(phone = phone, "Registration rejected: phone already taken");
            return Err(DomainError::Validation(PHONE_ALREADY_REGISTERED.to_string()).into());
        }

        let password_hash = hash_password(password).map_err(|e| {
            error!(error = %e, "Failed to hash password");
            DomainError::Internal(format!("Failed to hash password: {}", e))
        })?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            password_hash,
        };

        debug!(user_id = %user.id, "Saving user to repository");
        self.user_repository.save_user(user.clone()).await?;

        let token = self.mint_token(&user.id)?;

        info!(user_id = %user.id, phone = %user.phone, "User registered successfully");
        Ok(Session { user, token })
    }

    /// Checks credentials against the store. The same message is returned
    /// for an unknown phone and a wrong password.
    #[instrument(skip(self, req), fields(phone = %req.phone))]
    pub async fn login(&self, req: LoginRequest) -> Result<Session> {
        let phone = req.phone.trim();
        let password = req.password.trim();

        if phone.is_empty() || password.is_empty() {
            warn!("Login rejected: missing required fields");
            return Err(DomainError::Validation(LOGIN_FIELDS_REQUIRED.to_string()).into());
        }

        let user = self
            .user_repository
            .find_user_by_phone(phone)
            .await?
            .ok_or_else(|| {
                warn!(phone = phone, "Login rejected: unknown phone");
                DomainError::InvalidCredentials
            })?;

        let is_valid = verify_password(password, &user.password_hash).map_err(|e| {
            error!(error = %e, "Failed to verify password");
            DomainError::Internal(format!("Failed to verify password: {}", e))
        })?;

        if !is_valid {
            warn!(user_id = %user.id, "Login rejected: invalid password");
            return Err(DomainError::InvalidCredentials.into());
        }

        let token = self.mint_token(&user.id)?;

        info!(user_id = %user.id, phone = %user.phone, "Login successful");
        Ok(Session { user, token })
    }

    fn mint_token(&self, user_id: &str) -> Result<String> {
        issue_session_token(user_id, &self.session_secret).map_err(|e| {
            error!(error = %e, "Failed to issue session token");
            DomainError::Internal(format!("Failed to issue session token: {}", e)).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::user_repository::InMemoryUserRepository;
    use crate::infrastructure::security::verify_session_token;

    fn service() -> AuthService<InMemoryUserRepository> {
        AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            "test-secret".to_string(),
        )
    }

    fn register_req(name: &str, phone: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
        }
    }

    fn login_req(phone: &str, password: &str) -> LoginRequest {
        LoginRequest {
            phone: phone.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();

        let session = service
            .register(register_req("Alice", "5550001", "secret"))
            .await
            .unwrap();
        assert_eq!(session.user.name, "Alice");
        assert_ne!(session.user.password_hash, "secret");

        let session = service.login(login_req("5550001", "secret")).await.unwrap();
        let user_id = verify_session_token(&session.token, "test-secret").unwrap();
        assert_eq!(user_id, session.user.id);
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let service = service();

        for req in [
            register_req("", "5550001", "secret"),
            register_req("Alice", "", "secret"),
            register_req("Alice", "5550001", ""),
            register_req("   ", "5550001", "secret"),
        ] {
            let err = service.register(req).await.unwrap_err();
            assert_eq!(err.to_string(), REGISTER_FIELDS_REQUIRED);
        }
    }

    #[tokio::test]
    async fn test_register_trims_fields_before_storing() {
        let service = service();

        let session = service
            .register(register_req("  Alice  ", " 5550001 ", " secret "))
            .await
            .unwrap();
        assert_eq!(session.user.name, "Alice");
        assert_eq!(session.user.phone, "5550001");

        // Trimmed password must match on login.
        assert!(service.login(login_req("5550001", "secret")).await.is_ok());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_phone() {
        let service = service();
        service
            .register(register_req("Alice", "5550001", "secret"))
            .await
            .unwrap();

        let err = service
            .register(register_req("Bob", "5550001", "other"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), PHONE_ALREADY_REGISTERED);
    }

    #[tokio::test]
    async fn test_login_rejects_empty_fields() {
        let service = service();

        let err = service.login(login_req("", "secret")).await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FIELDS_REQUIRED);
        let err = service.login(login_req("5550001", "  ")).await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FIELDS_REQUIRED);
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_phone() {
        let service = service();

        let err = service
            .login(login_req("5559999", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let service = service();
        service
            .register(register_req("Alice", "5550001", "secret"))
            .await
            .unwrap();

        let err = service
            .login(login_req("5550001", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::InvalidCredentials)
        ));
    }
}
