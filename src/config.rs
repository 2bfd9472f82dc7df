use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://techfinalyear.com",
    "https://www.techfinalyear.com",
    "http://localhost:3000",
    "http://localhost:5173",
];

/// Process configuration read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Admin login is refused with a 500 while this is unset.
    pub admin_password: Option<String>,
    pub jwt_secret: String,
    pub admin_token_ttl: Duration,
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            admin_password: None,
            jwt_secret: random_secret(),
            admin_token_ttl: Duration::from_secs(4 * 60 * 60),
            assets_dir: PathBuf::from("attached_assets"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("JWT_SECRET not set; admin tokens will not survive a restart");
                defaults.jwt_secret.clone()
            });

        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| parse_origins(&v))
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.allowed_origins),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|s| !s.is_empty()),
            jwt_secret,
            admin_token_ttl: parse_duration_secs(
                "ADMIN_TOKEN_TTL_SECS",
                defaults.admin_token_ttl.as_secs(),
            ),
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// CORS check: allow-listed origins plus any Railway preview deployment.
pub fn is_allowed_origin(origin: &str, allowed: &[String]) -> bool {
    if origin.ends_with(".up.railway.app") || allowed.iter().any(|o| o == origin) {
        return true;
    }
    tracing::debug!(%origin, "Rejected CORS origin");
    false
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

fn random_secret() -> String {
    format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
}
