use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    cache::CacheStore,
    domain::{
        requests::{CreateUserData, LoginRequest, RegisterRequest},
        responses::UserResponse,
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

pub const MAX_LOGIN_ATTEMPTS: i64 = 5;
const LOCKOUT_WINDOW_MINUTES: i64 = 15;
const DEFAULT_ROLE: &str = "customer";

/// Counter has reached the lockout threshold for the current window.
pub fn is_locked_out(attempts: i64) -> bool {
    attempts >= MAX_LOGIN_ATTEMPTS
}

fn attempts_key(username: &str) -> String {
    format!("login:attempts:{username}")
}

#[derive(Clone)]
pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
    cache: Arc<CacheStore>,
}

impl AuthService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
        cache: Arc<CacheStore>,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
            cache,
        }
    }

    async fn record_failed_attempt(&self, username: &str) {
        let counted = self
            .cache
            .increment_with_ttl(
                &attempts_key(username),
                Duration::minutes(LOCKOUT_WINDOW_MINUTES),
            )
            .await;

        if let Some(attempts) = counted
            && is_locked_out(attempts)
        {
            warn!("🔒 Account '{}' locked out after {} failed attempts", username, attempts);
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError> {
        info!("📝 Registering user: {}", req.username);

        req.validate().map_err(ServiceError::from_validation)?;

        if self
            .query
            .find_by_username(req.username.clone())
            .await?
            .is_some()
        {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Username already taken".into(),
            )));
        }

        if self.query.find_by_email(req.email.clone()).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Email already registered".into(),
            )));
        }

        let hashed_password = self.hashing.hash_password(&req.password).await?;

        let user = self
            .command
            .create_user(&CreateUserData {
                username: req.username.clone(),
                email: req.email.clone(),
                phone: req.phone.clone(),
                password: hashed_password,
                role: DEFAULT_ROLE.to_string(),
            })
            .await?;

        info!("✅ Registered user: {}", user.username);

        Ok(user.into())
    }

    async fn login(&self, req: &LoginRequest) -> Result<(String, UserResponse), ServiceError> {
        info!("🔑 Login attempt for: {}", req.username);

        req.validate().map_err(ServiceError::from_validation)?;

        if let Some(attempts) = self
            .cache
            .get_from_cache::<i64>(&attempts_key(&req.username))
            .await
            && is_locked_out(attempts)
        {
            return Err(ServiceError::Forbidden(
                "Too many failed login attempts, try again later".into(),
            ));
        }

        let Some(user) = self.query.find_by_username(req.username.clone()).await? else {
            self.record_failed_attempt(&req.username).await;
            return Err(ServiceError::InvalidCredentials);
        };

        if self
            .hashing
            .compare_password(&user.password, &req.password)
            .await
            .is_err()
        {
            self.record_failed_attempt(&req.username).await;
            return Err(ServiceError::InvalidCredentials);
        }

        self.cache
            .delete_from_cache(&attempts_key(&req.username))
            .await;

        let token = self.jwt.generate_token(user.user_id, "access")?;

        info!("✅ Login successful for: {}", user.username);

        Ok((token, user.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifth_failure_locks_the_account() {
        assert!(!is_locked_out(0));
        assert!(!is_locked_out(4));
        assert!(is_locked_out(5));
        assert!(is_locked_out(12));
    }

    #[test]
    fn attempt_keys_are_per_username() {
        assert_eq!(attempts_key("ana"), "login:attempts:ana");
        assert_ne!(attempts_key("ana"), attempts_key("ben"));
    }
}
