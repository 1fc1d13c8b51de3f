use anyhow::Result;

use crate::services::storage::config_storage::ConfigStorage;
use crate::utils::static_paths::NewswirePaths;

pub fn run_set(keys: Vec<String>) -> Result<()> {
    let paths = NewswirePaths::new();
    let mut storage = ConfigStorage::new(&paths.config.config_file)?;

    for entry in &keys {
        let Some((key, value)) = entry.split_once('=') else {
            println!("Skipping '{}': expected key.path=value", entry);
            continue;
        };

        match storage.try_set_value(key.trim(), value.trim()) {
            Ok(()) => println!("{} = {}", key.trim(), value.trim()),
            Err(err) => println!("Failed to set '{}': {}", key.trim(), err),
        }
    }

    println!("Configuration saved!");
    Ok(())
}

pub fn run_get(keys: Vec<String>) -> Result<()> {
    let paths = NewswirePaths::new();
    let storage = ConfigStorage::new(&paths.config.config_file)?;

    for key in &keys {
        match storage.try_get_value::<toml::Value>(key) {
            Ok(value) => println!("{} = {}", key, value),
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}

pub fn run_list() -> Result<()> {
    let paths = NewswirePaths::new();
    let storage = ConfigStorage::new(&paths.config.config_file)?;

    let flattened = storage.get_flattened_config();

    if flattened.is_empty() {
        println!("No configuration found");
        return Ok(());
    }

    println!("Current configuration:");
    println!();

    let mut keys: Vec<_> = flattened.keys().collect();
    keys.sort();

    for key in keys {
        if let Some(value) = flattened.get(key) {
            println!("  {} = {}", key, value);
        }
    }

    Ok(())
}

pub fn run_show() -> Result<()> {
    let paths = NewswirePaths::new();
    let storage = ConfigStorage::new(&paths.config.config_file)?;

    let json = serde_json::to_string_pretty(storage.get_config())?;
    println!("{}", json);

    Ok(())
}

pub fn run_reset() -> Result<()> {
    let paths = NewswirePaths::new();
    let mut storage = ConfigStorage::new(&paths.config.config_file)?;

    print!("Are you sure you want to reset all configuration to defaults? (y/N): ");
    use std::io::{self, Write};
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() == "y" {
        storage.reset_to_defaults()?;
        println!("Configuration reset to defaults!");
    } else {
        println!("Reset cancelled");
    }

    Ok(())
}
