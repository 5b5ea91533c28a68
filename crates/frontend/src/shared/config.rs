use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub app: AppConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub brand: String,
    pub tagline: String,
    /// One of "error", "warn", "info", "debug", "trace"
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingConfig {
    /// Time slot assigned to new bookings
    pub default_slot: String,
    /// How long the "Booked with ..." toast stays up
    pub toast_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
brand = "FINADVISE"
tagline = "THE FUTURE OF FINANCIAL GUIDANCE"
log_level = "debug"

[booking]
default_slot = "10:30 AM"
toast_ms = 3000
"#;

/// Parse a configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

impl Config {
    /// `log::Level` for console_log; unknown names fall back to Info
    pub fn log_level(&self) -> log::Level {
        self.app.log_level.parse().unwrap_or(log::Level::Info)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                brand: "FINADVISE".to_string(),
                tagline: "THE FUTURE OF FINANCIAL GUIDANCE".to_string(),
                log_level: "info".to_string(),
            },
            booking: BookingConfig {
                default_slot: "10:30 AM".to_string(),
                toast_ms: 3000,
            },
        }
    }
}
