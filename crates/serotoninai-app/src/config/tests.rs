#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_point_at_localhost() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.api.timeout().is_none());
        assert_eq!(config.batch.selection().ids(), &[ModelId::Receptors]);
        assert!(config.display.color);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [api]
            request_timeout_secs = 45

            [batch]
            default_models = ["sert", "bbb"]
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.batch.selection().join("_"), "sert_bbb");
        assert_eq!(config.batch.output_dir, ".");
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        assert!(Config::from_toml_str("[batch]\ndefault_models = [\"kinase\"]").is_err());
    }

    #[test]
    fn test_cli_url_beats_env_url() {
        let mut config = Config::default();
        config.apply_overrides(Some("http://env:9000".into()), Some("http://cli:9001".into()));
        assert_eq!(config.api.base_url, "http://cli:9001");

        let mut config = Config::default();
        config.apply_overrides(Some("http://env:9000".into()), None);
        assert_eq!(config.api.base_url, "http://env:9000");

        let mut config = Config::default();
        config.apply_overrides(Some("  ".into()), None);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"https://predict.example.org\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "https://predict.example.org");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
