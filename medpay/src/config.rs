use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Date placeholders a display format must contain.
const DATE_TOKENS: [&str; 3] = ["YYYY", "MM", "DD"];

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "MM/DD/YYYY".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_buffer_size() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            export_dir: default_export_dir(),
            log_buffer_size: default_log_buffer_size(),
        }
    }
}

impl Settings {
    /// Read `medpay.toml` (or the file named by `MEDPAY_CONFIG`) and any
    /// `MEDPAY__*` environment overrides.
    pub fn new() -> Result<Self> {
        let config_path =
            std::env::var("MEDPAY_CONFIG").unwrap_or_else(|_| "medpay.toml".to_string());

        Self::load(&config_path)
    }

    pub fn load(config_path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("MEDPAY").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(Error::InvalidSettings(
                "currency_symbol must not be empty".to_string(),
            ));
        }
        if let Some(token) = DATE_TOKENS
            .iter()
            .find(|token| !self.date_format.contains(**token))
        {
            return Err(Error::InvalidSettings(format!(
                "date_format '{}' is missing the {} placeholder",
                self.date_format, token
            )));
        }
        if self.log_buffer_size == 0 {
            return Err(Error::InvalidSettings(
                "log_buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "MM/DD/YYYY");
        assert_eq!(settings.log_buffer_size, 5000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medpay.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "currency_symbol = \"€\"").unwrap();
        writeln!(file, "date_format = \"DD.MM.YYYY\"").unwrap();
        writeln!(file, "export_dir = \"/tmp/exports\"").unwrap();

        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.date_format, "DD.MM.YYYY");
        assert_eq!(settings.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(settings.log_buffer_size, 5000);
    }

    #[test]
    fn validate_rejects_incomplete_date_format() {
        let settings = Settings {
            date_format: "MM/YYYY".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
        assert!(err.to_string().contains("DD"));
    }

    #[test]
    fn validate_rejects_empty_log_buffer() {
        let settings = Settings {
            log_buffer_size: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_currency_symbol() {
        let settings = Settings {
            currency_symbol: "  ".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid settings: currency_symbol must not be empty"
        );
    }
}
