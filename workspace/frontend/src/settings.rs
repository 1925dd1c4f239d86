use log::Level;
use web_sys::window;

/// Prefix of every localStorage key read by [`AppSettings::from_environment`].
const STORAGE_PREFIX: &str = "culinarycraft_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Delay before a read from the store resolves, in milliseconds
    pub simulated_latency_ms: u32,

    /// Delay before a form submission resolves, in milliseconds
    pub submit_delay_ms: u32,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Records appended by one "Load more" click
    pub load_more_batch: usize,

    /// Shown when a cover image URL fails to load
    pub placeholder_image_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            simulated_latency_ms: 300,
            submit_delay_ms: 1000,
            toast_duration_ms: 5000,
            load_more_batch: 3,
            placeholder_image_url: model::PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        // Detect if running in development mode
        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Try to read from localStorage for custom settings
            if let Ok(Some(storage)) = window.local_storage() {
                settings.apply_overrides(|key| {
                    storage
                        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                        .ok()
                        .flatten()
                });
            }
        }

        settings
    }

    /// Overlays values returned by `read` for each known key (without the
    /// storage prefix). Values that do not parse are ignored.
    pub fn apply_overrides<F>(&mut self, read: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = read("log_level") {
            self.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }

        if let Some(latency) = read("simulated_latency_ms").and_then(|v| v.parse().ok()) {
            self.simulated_latency_ms = latency;
        }

        if let Some(delay) = read("submit_delay_ms").and_then(|v| v.parse().ok()) {
            self.submit_delay_ms = delay;
        }

        if let Some(duration) = read("toast_duration_ms").and_then(|v| v.parse().ok()) {
            self.toast_duration_ms = duration;
        }

        // A zero batch would make "Load more" a no-op.
        if let Some(batch) = read("load_more_batch").and_then(|v| v.parse().ok()) {
            if batch > 0 {
                self.load_more_batch = batch;
            }
        }

        if let Some(url) = read("placeholder_image_url") {
            if !url.trim().is_empty() {
                self.placeholder_image_url = url;
            }
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
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
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> AppSettings {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| values.get(key).cloned());
        settings
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.load_more_batch, 3);
        assert_eq!(settings.log_level, Level::Info);
        assert_eq!(settings.placeholder_image_url, model::PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_overrides_apply() {
        let settings = overrides(&[
            ("log_level", "TRACE"),
            ("simulated_latency_ms", "0"),
            ("submit_delay_ms", "250"),
            ("load_more_batch", "6"),
        ]);
        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.simulated_latency_ms, 0);
        assert_eq!(settings.submit_delay_ms, 250);
        assert_eq!(settings.load_more_batch, 6);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let settings = overrides(&[
            ("log_level", "loud"),
            ("toast_duration_ms", "soon"),
            ("load_more_batch", "0"),
            ("placeholder_image_url", "  "),
        ]);
        let defaults = AppSettings::default();
        assert_eq!(settings.log_level, defaults.log_level);
        assert_eq!(settings.toast_duration_ms, defaults.toast_duration_ms);
        assert_eq!(settings.load_more_batch, defaults.load_more_batch);
        assert_eq!(settings.placeholder_image_url, defaults.placeholder_image_url);
    }
}
