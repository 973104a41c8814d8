use std::sync::Arc;
use crate::domain::{
    models::user::{Role, User},
    ports::{CredentialService, UserRepository},
};
use crate::error::AppError;
use tracing::info;

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    credentials: Arc<dyn CredentialService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, credentials: Arc<dyn CredentialService>) -> Self {
        Self { users, credentials }
    }

    pub async fn register(&self, email: &str, password: &str, name: &str, role: Role) -> Result<(User, String), AppError> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation("A valid email is required".into()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("Password must not be empty".into()));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let password_hash = self.credentials.hash_secret(password)?;
        let user = User::new(email, name.trim().to_string(), password_hash, role);
        // The unique index on email still catches a concurrent registration.
        let created = self.users.create(&user).await?;

        let token = self.credentials.issue(&created.id)?;
        info!(user_id = %created.id, role = %created.role, "Registered user");
        Ok((created, token))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let user = self.users.find_by_email(&normalize_email(email)).await?
            .ok_or(AppError::Unauthorized)?;

        if !self.credentials.verify_secret(password, &user.password_hash) {
            return Err(AppError::Unauthorized);
        }

        let token = self.credentials.issue(&user.id)?;
        info!(user_id = %user.id, "User logged in");
        Ok((user, token))
    }

    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let subject = self.credentials.verify_token(token)?;
        self.users.find_by_id(&subject).await?
            .ok_or(AppError::NotFound("User not found".into()))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
