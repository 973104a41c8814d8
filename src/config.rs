use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub gemini_api_key: Option<String>,
    pub ai_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl_days: env::var("TOKEN_TTL_DAYS").unwrap_or_else(|_| "7".to_string()).parse().expect("TOKEN_TTL_DAYS must be a number"),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            ai_timeout: Duration::from_secs(
                env::var("AI_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string()).parse().expect("AI_TIMEOUT_SECS must be a number"),
            ),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }
}
