//! Account loading from the users file and the bootstrap admin.

use btms::config::read_accounts;
use btms::{Role, ServerConfig};
use std::fs;

fn write_users(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("btms-{}-{}.json", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_accounts_file() {
    let path = write_users(
        "users",
        r#"[
            {"username": "alice", "password": "a", "role": "coach"},
            {"username": "bob", "password": "b", "role": "player"}
        ]"#,
    );
    let accounts = read_accounts(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].role, Role::Coach);
    assert_eq!(accounts[1].username, "bob");
}

#[test]
fn malformed_accounts_file_is_invalid_data() {
    let path = write_users("bad", r#"[{"username": "x", "role": "referee"}]"#);
    let err = read_accounts(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn bootstrap_admin_replaces_file_admin() {
    let path = write_users(
        "admin",
        r#"[{"username": "admin", "password": "old", "role": "coach"}]"#,
    );
    let config = ServerConfig {
        users_file: Some(path.clone()),
        admin_password: Some("secret".to_string()),
        ..ServerConfig::default()
    };
    let accounts = config.load_accounts().unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].password, "secret");
    assert_eq!(accounts[0].role, Role::Admin);
}

#[test]
fn defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert!(!config.seed_demo_data);
    assert!(config.load_accounts().unwrap().is_empty());
}
