use std::sync::OnceLock;

/// Runtime configuration, read from the environment once at startup and
/// immutable afterwards. A `.env` file is honored when present
/// (`dotenvy::dotenv()` runs before the first access in `main`).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    /// When on, error responses include underlying store detail. Off by
    /// default: clients only ever see a generic failure message.
    pub debug: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://tasks.db?mode=rwc".to_string()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            debug: std::env::var("DEBUG")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::from_env)
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn parses_debug_flag_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(parse_bool("yes"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
    }
}
