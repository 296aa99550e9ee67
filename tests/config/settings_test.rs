// tests/config/settings_test.rs
#[cfg(test)]
mod tests {
    use fluentsql::config::{Settings, SettingsError, CONFIG_ENV_VAR};
    use fluentsql::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn test_configured_dialect_drives_rendering() {
        let settings = Settings::from_toml_str("[render]\ndialect = \"tsql\"\n").unwrap();
        let sql = Select::all()
            .from("Users")
            .to_sql(&settings.dialect())
            .unwrap();
        assert_eq!(sql, "SELECT *\r\nFROM [Users]");
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "fluentsql-settings-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[render]\ndialect = \"ansi\"\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.dialect(), Dialect::Ansi);
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/fluentsql.toml");
        let result = Settings::from_file(&path);
        assert!(matches!(result, Err(SettingsError::FileNotFound(p)) if p == path));
    }

    // Only this test touches the environment, so both lookups share one function.
    #[test]
    fn test_load_uses_env_var() {
        let path = std::env::temp_dir().join(format!(
            "fluentsql-load-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[render]\ndialect = \"tsql\"\n").unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &path);
        let loaded = Settings::load();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().dialect(), Dialect::TSql);

        let missing = PathBuf::from("/nonexistent/fluentsql-load.toml");
        std::env::set_var(CONFIG_ENV_VAR, &missing);
        let result = Settings::load();
        std::env::remove_var(CONFIG_ENV_VAR);
        assert!(matches!(result, Err(SettingsError::FileNotFound(p)) if p == missing));
    }
}
