use std::str::FromStr;
use std::time::Duration;

/// Service configuration, read from the environment with defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub fetch: FetchSettings,
    pub summary: SummarySettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SummarySettings {
    pub sentence_count: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                port: env_or("SERVER_PORT", 3000),
            },
            fetch: FetchSettings {
                timeout: Duration::from_secs(env_or("FETCH_TIMEOUT_SECS", 30)),
            },
            summary: SummarySettings {
                sentence_count: env_or("SUMMARY_SENTENCES", 3),
            },
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
