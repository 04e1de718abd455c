use anyhow::Result;
use starship_info::utils::validation::Validate;
use starship_info::{CatalogError, ConfigProvider, HttpCatalogClient, Targets, TomlConfig};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_full_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("starship-info.toml");
    std::fs::write(
        &config_path,
        r#"
[server]
bind_addr = "127.0.0.1:9090"

[catalog]
base_url = "https://swapi.dev/api/"
timeout_seconds = 20

[targets]
starship = "Millennium Falcon"
person = "Han Solo"
planet = "Corellia"

[logging]
format = "compact"
verbose = true
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(20)));
    assert!(config.verbose());
    assert_eq!(
        config.targets(),
        Targets {
            starship: "Millennium Falcon".to_string(),
            person: "Han Solo".to_string(),
            planet: "Corellia".to_string(),
        }
    );

    let client = HttpCatalogClient::from_config(&config)?;
    assert_eq!(
        client.search_url(starship_info::domain::model::Collection::People),
        "https://swapi.dev/api/people/"
    );
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}

#[test]
fn test_invalid_bind_addr_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(
        &config_path,
        r#"
[server]
bind_addr = "everywhere"

[catalog]
base_url = "https://swapi.dev/api"
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidConfigValueError { ref field, .. } if field == "bind_addr"
    ));
    Ok(())
}
