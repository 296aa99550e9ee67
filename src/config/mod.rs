//! Configuration module.
//!
//! Lets an application pick its rendering dialect from a TOML file instead
//! of hard-coding it.

mod settings;

pub use settings::{RenderSettings, Settings, SettingsError, CONFIG_ENV_VAR};
