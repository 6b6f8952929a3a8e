/// Runtime configuration.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | POS_DB_PATH | uslu_pos.db | SQLite file holding orders |
/// | POS_CATALOG_PATH | (built-in menu) | JSON catalog file |
/// | POS_LOG_LEVEL | info | tracing filter when RUST_LOG is unset |
/// | POS_LOG_JSON | false | emit JSON log lines |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: String,
    pub catalog_path: Option<String>,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: "uslu_pos.db".into(),
            catalog_path: None,
            log_level: "info".into(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        Config {
            db_path: lookup("POS_DB_PATH").unwrap_or(defaults.db_path),
            catalog_path: lookup("POS_CATALOG_PATH").filter(|p| !p.is_empty()),
            log_level: lookup("POS_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: lookup("POS_LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
        }
    }
}
