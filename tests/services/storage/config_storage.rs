use super::ConfigStorage;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{fs, io};

fn temp_config_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir()
        .join(format!("newswire-config-test-{name}-{nanos}"))
        .join("config.toml")
}

fn cleanup(path: &PathBuf) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::remove_dir_all(parent)?;
    }
    Ok(())
}

#[test]
fn new_creates_default_config_file_when_missing() {
    let path = temp_config_file("new-default");

    let storage = ConfigStorage::new(&path).expect("create storage");
    assert!(path.exists());
    assert_eq!(storage.get_config().guardian.section, "business");
    assert_eq!(storage.get_config().reddit.subreddit, "investing");
    assert_eq!(storage.get_config().newsapi.api_key, None);

    cleanup(&path).expect("cleanup");
}

#[test]
fn set_and_get_nested_values_updates_config() {
    let path = temp_config_file("set-get");
    let mut storage = ConfigStorage::new(&path).expect("create storage");

    storage
        .try_set_value("newsapi.page_size", "5")
        .expect("set integer");
    storage
        .try_set_value("newsapi.api_key", "\"abc\"")
        .expect("set string literal");

    let page_size: u32 = storage
        .try_get_value("newsapi.page_size")
        .expect("read page size");
    let key: Option<String> = storage.try_get_value("newsapi.api_key").expect("read key");

    assert_eq!(page_size, 5);
    assert_eq!(key.as_deref(), Some("abc"));

    cleanup(&path).expect("cleanup");
}

#[test]
fn flattened_config_contains_dot_notation_keys() {
    let path = temp_config_file("flatten");
    let storage = ConfigStorage::new(&path).expect("create storage");
    let flat = storage.get_flattened_config();

    assert_eq!(flat.get("guardian.section"), Some(&"business".to_string()));
    assert_eq!(flat.get("reddit.limit"), Some(&"15".to_string()));
    assert!(flat.contains_key("reddit.keywords"));

    cleanup(&path).expect("cleanup");
}

#[test]
fn set_value_rejects_unknown_paths() {
    let path = temp_config_file("bad-path");
    let mut storage = ConfigStorage::new(&path).expect("create storage");
    let err = storage
        .try_set_value("newsapi.missing.field", "1")
        .expect_err("must reject unknown path");
    assert!(err.contains("Key path not found"));

    cleanup(&path).expect("cleanup");
}

#[test]
fn reset_to_defaults_restores_default_values() {
    let path = temp_config_file("reset");
    let mut storage = ConfigStorage::new(&path).expect("create storage");
    storage
        .try_set_value("reddit.limit", "99")
        .expect("set override");
    storage.reset_to_defaults().expect("reset defaults");

    let limit: u32 = storage.try_get_value("reddit.limit").expect("read limit");
    assert_eq!(limit, 15);

    cleanup(&path).expect("cleanup");
}
