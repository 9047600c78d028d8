use common::LabelLocale;
use compute::SeriesGenerator;
use compute::generator::DEFAULT_DAYS;
use log::Level;
use web_sys::window;

const SEED_KEY: &str = "raincast_seed";
const DAYS_KEY: &str = "raincast_days";
const LOCALE_KEY: &str = "raincast_locale";
const LOG_LEVEL_KEY: &str = "raincast_log_level";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Number of generated days
    pub days: usize,

    /// Fixed seed; `None` draws a new series on every load
    pub seed: Option<u64>,

    /// Language of the axis labels
    pub locale: LabelLocale,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            days: DEFAULT_DAYS,
            seed: None,
            locale: LabelLocale::default(),
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(key).ok().flatten();
            settings.apply_overrides(
                read(SEED_KEY).as_deref(),
                read(DAYS_KEY).as_deref(),
                read(LOCALE_KEY).as_deref(),
                read(LOG_LEVEL_KEY).as_deref(),
            );
        }

        settings
    }

    /// Apply stored string values; unparsable entries keep the current value.
    pub fn apply_overrides(
        &mut self,
        seed: Option<&str>,
        days: Option<&str>,
        locale: Option<&str>,
        log_level: Option<&str>,
    ) {
        if let Some(seed) = seed.and_then(|s| s.trim().parse::<u64>().ok()) {
            self.seed = Some(seed);
        }

        if let Some(days) = days.and_then(|d| d.trim().parse::<usize>().ok()) {
            self.days = days;
        }

        if let Some(locale) = locale.and_then(|l| l.parse::<LabelLocale>().ok()) {
            self.locale = locale;
        }

        if let Some(level) = log_level {
            self.log_level = match level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }
    }

    /// Generator configured from these settings
    pub fn generator(&self) -> SeriesGenerator {
        let generator = SeriesGenerator::new(self.days).with_locale(self.locale);
        match self.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_are_parsed() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(Some("42"), Some("120"), Some("en"), Some("TRACE"));

        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.days, 120);
        assert_eq!(settings.locale, LabelLocale::English);
        assert_eq!(settings.log_level, Level::Trace);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(Some("abc"), Some("-1"), Some("fr"), Some("loud"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(Some("7"), Some("30"), None, None);
        assert_eq!(settings.generator().build(), settings.generator().build());
        assert_eq!(settings.generator().build().len(), 30);
    }
}
