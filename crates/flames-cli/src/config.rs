/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output format (default: text).
    pub format: OutputFormat,
    /// Print leftover letters and every elimination step.
    pub explain: bool,
}

impl Config {
    /// Load configuration from `FLAMES_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let format = match get("FLAMES_FORMAT").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            format,
            explain: get("FLAMES_EXPLAIN")
                .map(|v| env_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_flags(mut self, json: bool, explain: bool) -> Self {
        if json {
            self.format = OutputFormat::Json;
        }
        if explain {
            self.explain = true;
        }
        self
    }
}

fn env_flag(value: &str) -> bool {
    let v = value.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.explain);
    }

    #[test]
    fn test_env_values() {
        let config = config_from(&[("FLAMES_FORMAT", "JSON"), ("FLAMES_EXPLAIN", "true")]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.explain);

        assert!(config_from(&[("FLAMES_EXPLAIN", "1")]).explain);
        assert!(!config_from(&[("FLAMES_EXPLAIN", "0")]).explain);
    }

    #[test]
    fn test_unknown_format_falls_back_to_text() {
        let config = config_from(&[("FLAMES_FORMAT", "yaml")]);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_env() {
        let config = config_from(&[]).with_flags(true, true);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.explain);

        let config = config_from(&[("FLAMES_FORMAT", "json")]).with_flags(false, false);
        assert_eq!(config.format, OutputFormat::Json);
    }
}
