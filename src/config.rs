//! App Configuration
//!
//! Fixed settings for the page. There is no environment in the browser, so
//! `Default` is the only source.

/// Page and persistence settings, provided via context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// localStorage key holding the serialized list
    pub storage_key: &'static str,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub footer: &'static str,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos",
            title: "SityakaTyatodo",
            placeholder: "新しいToDoを追加...",
            footer: "© 2023 SityakaTyatodo. All rights reserved.",
            log_level: log::Level::Info,
        }
    }
}
