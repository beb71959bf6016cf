use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    // App Settings
    pub app_name: String,
    pub debug: bool,

    // Server Settings
    pub host: String,
    pub port: u16,

    /// Where an already-authenticated client lands when the guard turns it
    /// away from the unauthenticated area. Deployments differ here
    /// ("/dashboard" for the account app, "/events" for the booking app),
    /// so it is configuration rather than a constant.
    pub landing_path: String,
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            app_name: get_env("APP_NAME", "Gatehouse"),
            debug: get_env_bool("DEBUG", false),

            host: get_env("HOST", "0.0.0.0"),
            port: get_env_int("PORT", 8000) as u16,

            landing_path: get_env("LANDING_PATH", "/dashboard"),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::new);

pub fn get_settings() -> &'static Settings {
    &SETTINGS
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_int(key: &str, default: i32) -> i32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn get_env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
