use std::env;

/// Application settings, read once at startup.
pub struct Settings {
    pub database_url: String,
    /// JWT signing secret. The variable name is kept from the original
    /// deployment environment.
    pub jwt_secret: String,
    pub bind_addr: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),
}

impl Settings {
    /// Load settings from environment variables. `APP_SUPER_KEY` is
    /// mandatory; the rest have development defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://hotel.db?mode=rwc".to_string());

        let jwt_secret =
            env::var("APP_SUPER_KEY").map_err(|_| SettingsError::MissingVariable("APP_SUPER_KEY"))?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
        })
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_expose_jwt_secret() {
        let settings = Settings {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "super-secret-value".to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
        };

        let output = format!("{:?}", settings);
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("super-secret-value"));
    }
}
