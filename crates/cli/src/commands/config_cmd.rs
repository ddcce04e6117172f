//! `recruitem config`: Print the default configuration.

use recruitem_config::AppConfig;

pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    println!("# {}", AppConfig::config_dir().join("config.toml").display());
    println!("{}", AppConfig::default_toml());
    Ok(())
}
