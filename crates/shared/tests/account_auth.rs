mod support;

use shared::abstract_trait::{AuthServiceTrait, HashingTrait, JwtServiceTrait, UserServiceTrait};
use shared::config::{Hashing, JwtConfig};
use shared::domain::requests::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
};
use shared::errors::{RepositoryError, ServiceError};
use shared::model::{STATUS_APPROVED, STATUS_COMPLETED, STATUS_PENDING};
use shared::service::{AuthService, UserService};
use std::sync::Arc;
use support::{MockUsers, unreachable_cache, user};

fn auth_service(
    users: &Arc<MockUsers>,
    hashing: &Arc<Hashing>,
    jwt: &Arc<JwtConfig>,
) -> AuthService {
    AuthService::new(
        users.clone(),
        users.clone(),
        hashing.clone(),
        jwt.clone(),
        unreachable_cache(),
    )
}

fn user_service(users: &Arc<MockUsers>, hashing: &Arc<Hashing>) -> UserService {
    UserService::new(users.clone(), users.clone(), hashing.clone())
}

fn registration(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        phone: None,
        password: password.to_string(),
        confirm_password: password.to_string(),
    }
}

fn credentials(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn registration_defaults_to_the_customer_role() {
    let users = MockUsers::new();
    let hashing = Arc::new(Hashing::new());
    let jwt = Arc::new(JwtConfig::new("test secret"));
    let svc = auth_service(&users, &hashing, &jwt);

    let profile = svc
        .register(&registration("ana", "ana@example.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(profile.username, "ana");
    assert_eq!(profile.role, "customer");

    // only the bcrypt hash is stored
    let stored = users.password_of(profile.id);
    assert_ne!(stored, "secret123");
    assert!(hashing.compare_password(&stored, "secret123").await.is_ok());
}

#[tokio::test]
async fn duplicate_usernames_and_emails_are_rejected() {
    let users = MockUsers::new();
    users.seed(user(1, "ana", "ana@example.com", "customer", "hash"));
    let hashing = Arc::new(Hashing::new());
    let jwt = Arc::new(JwtConfig::new("test secret"));
    let svc = auth_service(&users, &hashing, &jwt);

    let err = svc
        .register(&registration("ana", "other@example.com", "secret123"))
        .await
        .unwrap_err();
    match err {
        ServiceError::Repo(RepositoryError::AlreadyExists(msg)) => {
            assert_eq!(msg, "Username already taken");
        }
        other => panic!("expected a conflict, got {other:?}"),
    }

    let err = svc
        .register(&registration("ben", "ana@example.com", "secret123"))
        .await
        .unwrap_err();
    match err {
        ServiceError::Repo(RepositoryError::AlreadyExists(msg)) => {
            assert_eq!(msg, "Email already registered");
        }
        other => panic!("expected a conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn mismatched_confirmation_fails_validation() {
    let users = MockUsers::new();
    let hashing = Arc::new(Hashing::new());
    let jwt = Arc::new(JwtConfig::new("test secret"));
    let svc = auth_service(&users, &hashing, &jwt);

    let mut req = registration("ana", "ana@example.com", "secret123");
    req.confirm_password = "secret124".to_string();

    let err = svc.register(&req).await.unwrap_err();
    match err {
        ServiceError::Validation(messages) => {
            assert!(messages.iter().any(|m| m.contains("Passwords do not match")));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_issues_a_verifiable_access_token() {
    let users = MockUsers::new();
    let hashing = Arc::new(Hashing::new());
    let jwt = Arc::new(JwtConfig::new("test secret"));
    let hash = hashing.hash_password("secret123").await.unwrap();
    users.seed(user(7, "ana", "ana@example.com", "customer", &hash));
    let svc = auth_service(&users, &hashing, &jwt);

    let (token, profile) = svc.login(&credentials("ana", "secret123")).await.unwrap();

    assert_eq!(profile.id, 7);
    assert_eq!(profile.username, "ana");
    assert_eq!(jwt.verify_token(&token, "access").unwrap(), 7);
    assert!(jwt.verify_token(&token, "refresh").is_err());
}

#[tokio::test]
async fn bad_credentials_look_the_same_either_way() {
    let users = MockUsers::new();
    let hashing = Arc::new(Hashing::new());
    let jwt = Arc::new(JwtConfig::new("test secret"));
    let hash = hashing.hash_password("secret123").await.unwrap();
    users.seed(user(1, "ana", "ana@example.com", "customer", &hash));
    let svc = auth_service(&users, &hashing, &jwt);

    let unknown = svc.login(&credentials("ghost", "secret123")).await.unwrap_err();
    assert!(matches!(unknown, ServiceError::InvalidCredentials));

    let wrong = svc.login(&credentials("ana", "secret999")).await.unwrap_err();
    assert!(matches!(wrong, ServiceError::InvalidCredentials));
}

#[tokio::test]
async fn profile_updates_skip_uniqueness_against_yourself() {
    let users = MockUsers::new();
    users.seed(user(1, "ana", "ana@example.com", "customer", "hash"));
    users.seed(user(2, "ben", "ben@example.com", "customer", "hash"));
    let hashing = Arc::new(Hashing::new());
    let svc = user_service(&users, &hashing);

    let taken = UpdateProfileRequest {
        username: "ana".to_string(),
        email: "ben@example.com".to_string(),
        phone: None,
    };
    let err = svc.update_profile(2, &taken).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::AlreadyExists(_))
    ));

    let own = UpdateProfileRequest {
        username: "ben".to_string(),
        email: "ben@new.example.com".to_string(),
        phone: Some("09181234567".to_string()),
    };
    let response = svc.update_profile(2, &own).await.unwrap();
    assert_eq!(response.message.as_deref(), Some("Profile updated successfully"));
    assert_eq!(response.data.user.email, "ben@new.example.com");
    assert_eq!(response.data.user.phone.as_deref(), Some("09181234567"));
}

#[tokio::test]
async fn reservation_stats_fold_per_status() {
    let users = MockUsers::new();
    users.seed(user(1, "ana", "ana@example.com", "customer", "hash"));
    users.set_stats(
        1,
        vec![
            (STATUS_PENDING.to_string(), 2),
            (STATUS_APPROVED.to_string(), 1),
            (STATUS_COMPLETED.to_string(), 3),
            ("archived".to_string(), 1),
        ],
    );
    let hashing = Arc::new(Hashing::new());
    let svc = user_service(&users, &hashing);

    let response = svc.get_stats(1).await.unwrap();
    let stats = response.data.stats;

    assert_eq!(stats.pending, 2);
    assert_eq!(stats.approved, 1);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.rejected, 0);
    // unknown statuses still count toward the total
    assert_eq!(stats.total, 7);
}

#[tokio::test]
async fn password_change_requires_the_current_password() {
    let users = MockUsers::new();
    let hashing = Arc::new(Hashing::new());
    let hash = hashing.hash_password("old-secret").await.unwrap();
    users.seed(user(1, "ana", "ana@example.com", "customer", &hash));
    let svc = user_service(&users, &hashing);

    let wrong = ChangePasswordRequest {
        current_password: "not-the-one".to_string(),
        new_password: "new-secret".to_string(),
    };
    let err = svc.change_password(1, &wrong).await.unwrap_err();
    match err {
        ServiceError::Forbidden(msg) => assert_eq!(msg, "Current password is incorrect"),
        other => panic!("expected forbidden, got {other:?}"),
    }

    let right = ChangePasswordRequest {
        current_password: "old-secret".to_string(),
        new_password: "new-secret".to_string(),
    };
    let response = svc.change_password(1, &right).await.unwrap();
    assert_eq!(response.message, "Password changed successfully");

    let stored = users.password_of(1);
    assert!(hashing.compare_password(&stored, "new-secret").await.is_ok());
    assert!(hashing.compare_password(&stored, "old-secret").await.is_err());
}

#[tokio::test]
async fn missing_users_surface_not_found() {
    let users = MockUsers::new();
    let hashing = Arc::new(Hashing::new());
    let svc = user_service(&users, &hashing);

    let err = svc.get_user(99).await.unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
}
