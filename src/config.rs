use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_secret: String,
    pub session_ttl_min: i64,
    pub upload_dir: String,
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            session_secret: env::var("SESSION_SECRET").expect("SESSION_SECRET must be set"),
            session_ttl_min: env::var("SESSION_TTL_MIN").unwrap_or_else(|_| "15".to_string()).parse().expect("SESSION_TTL_MIN must be a number"),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }
}
