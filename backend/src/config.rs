use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// SMTP relay settings. Every field the relay needs is optional here: a missing value
/// only fails the request that needs it, it never stops the server from starting.
#[derive(Clone, Debug, PartialEq)]
pub struct MailConfig {
    pub host: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub to: Option<String>,
    pub timeout: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub mail: MailConfig,
    pub bind_address: String,
    pub frontend_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("EMAIL_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("EMAIL_PORT={} is not a valid port, using {}", raw, DEFAULT_SMTP_PORT);
                DEFAULT_SMTP_PORT
            }),
            None => DEFAULT_SMTP_PORT,
        };

        let timeout_secs = match non_empty("EMAIL_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!("EMAIL_TIMEOUT_SECS={} is not a number, using {}", raw, DEFAULT_SMTP_TIMEOUT_SECS);
                DEFAULT_SMTP_TIMEOUT_SECS
            }),
            None => DEFAULT_SMTP_TIMEOUT_SECS,
        };

        AppConfig {
            mail: MailConfig {
                host: non_empty("EMAIL_HOST"),
                port,
                username: non_empty("EMAIL_USER"),
                password: non_empty("EMAIL_PASS"),
                to: non_empty("EMAIL_TO"),
                timeout: Duration::from_secs(timeout_secs),
            },
            bind_address: non_empty("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            frontend_dir: non_empty("FRONTEND_DIR").map(PathBuf::from),
            sentry_dsn: non_empty("SENTRY_DSN"),
        }
    }
}

impl MailConfig {
    /// Names of the variables the relay cannot work without.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.is_none() {
            missing.push("EMAIL_HOST");
        }
        if self.username.is_none() {
            missing.push("EMAIL_USER");
        }
        if self.password.is_none() {
            missing.push("EMAIL_PASS");
        }
        if self.to.is_none() {
            missing.push("EMAIL_TO");
        }
        missing
    }

    pub fn warn_missing(&self) {
        for var in self.missing_vars() {
            tracing::warn!("{} is not set, contact form submissions will fail", var);
        }
    }
}
