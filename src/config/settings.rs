//! User settings for centavo
//!
//! Manages display preferences: the currency symbol and the separators used
//! when formatting amounts for the terminal. Defaults follow the Brazilian
//! currency convention (`R$ 1.234,56`).

use serde::{Deserialize, Serialize};

use super::paths::CentavoPaths;
use crate::error::CentavoError;
use crate::models::Money;

/// User settings for centavo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Separator between thousands groups
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Separator before the minor-unit digits
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_thousands_separator() -> char {
    '.'
}

fn default_decimal_separator() -> char {
    ','
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl Settings {
    /// Format a money amount using the configured currency display
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(
            &self.currency_symbol,
            self.thousands_separator,
            self.decimal_separator,
        )
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CentavoPaths) -> Result<Self, CentavoError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CentavoError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| CentavoError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CentavoPaths) -> Result<(), CentavoError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CentavoError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CentavoError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.thousands_separator, '.');
        assert_eq!(settings.decimal_separator, ',');
    }

    #[test]
    fn test_format_currency() {
        let settings = Settings::default();
        assert_eq!(
            settings.format_currency(Money::from_cents(123456)),
            "R$ 1.234,56"
        );
        assert_eq!(
            settings.format_currency(Money::from_cents(-120_000)),
            "-R$ 1.200,00"
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentavoPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        settings.thousands_separator = ',';
        settings.decimal_separator = '.';

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.thousands_separator, ',');
    }

    #[test]
    fn test_load_or_create_uses_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentavoPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "R$");
    }
}
