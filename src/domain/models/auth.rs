use serde::{Deserialize, Serialize};
use crate::domain::models::user::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: User,
}

impl AuthResponse {
    pub fn bearer(access_token: String, user: User) -> Self {
        Self { access_token, token_type: "bearer", user }
    }
}
