use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with_profile(None)
    }

    /// Same as `from_env`, with `profile` (e.g. from `--profile`) taking precedence over `PROFILE`
    pub fn from_env_with_profile(profile: Option<String>) -> Self {
        Self::from_lookup(profile, |key| env::var(key).ok())
    }

    fn from_lookup(profile: Option<String>, var: impl Fn(&str) -> Option<String>) -> Self {
        let profile = profile
            .or_else(|| var("PROFILE"))
            .unwrap_or_else(|| "default".to_string());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| {
            if profile == "default" {
                "sqlite://paddock.db?mode=rwc".to_string()
            } else {
                format!("sqlite://paddock_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
            seed_demo: var("SEED_DEMO").is_some(),
        }
    }
}
