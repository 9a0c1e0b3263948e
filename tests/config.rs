#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::libs::config::{Config, StorageConfig, ViewConfig};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.storage.is_none());
        assert!(config.view.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.storage.is_none());
        assert!(config.view.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                dir: Some("/tmp/tudo-data".into()),
            }),
            view: Some(ViewConfig { show_done: false }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.storage, config.storage);
        assert_eq!(loaded.view, config.view);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_sections_are_omitted_from_file(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: None,
            view: Some(ViewConfig { show_done: true }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert!(loaded.storage.is_none());
        assert_eq!(loaded.view, config.view);
    }

    #[test]
    fn test_view_defaults_to_showing_done() {
        assert!(ViewConfig::default().show_done);
    }
}
