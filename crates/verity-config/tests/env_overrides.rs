use figment::Jail;
use verity_config::VerityConfig;

#[test]
fn env_overrides_backend_values() {
    Jail::expect_with(|jail| {
        jail.set_env("VERITY_BACKEND__BASE_URL", "https://env.example");
        jail.set_env("VERITY_BACKEND__TIMEOUT_SECS", "42");

        let config = VerityConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url, "https://env.example");
        assert_eq!(config.backend.timeout_secs, 42);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".verity")?;
        jail.create_file(
            ".verity/config.toml",
            r#"
[store]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("VERITY_STORE__PATH", "from-env.db");

        let config = VerityConfig::load().expect("config loads");
        assert_eq!(config.store.path, "from-env.db");
        Ok(())
    });
}
