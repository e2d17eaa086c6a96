//! Server configuration from environment variables.
//!
//! - `HOST` (default `0.0.0.0`) and `PORT` (default `8080`)
//! - `BTMS_SEED`: load a demo tournament at startup (`1`, `true`, `yes`, `on`)
//! - `BTMS_USERS`: path to a JSON array of `{ "username", "password", "role" }`
//! - `BTMS_ADMIN_PASSWORD`: if set, adds an `admin` account with this password

use crate::logic::Role;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An account that can log in to the API.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
    pub users_file: Option<PathBuf>,
    pub admin_password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_demo_data: false,
            users_file: None,
            admin_password: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Trimmed, non-empty value of `key`.
fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_flag(key: &str) -> bool {
    env_value(key)
        .map(|value| {
            matches!(
                value.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env_value("PORT").and_then(|p| match p.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                log::warn!("Ignoring invalid PORT {:?}", p);
                None
            }
        });
        Self {
            host: env_value("HOST").unwrap_or_else(default_host),
            port: port.unwrap_or_else(default_port),
            seed_demo_data: env_flag("BTMS_SEED"),
            users_file: env_value("BTMS_USERS").map(PathBuf::from),
            admin_password: env_value("BTMS_ADMIN_PASSWORD"),
        }
    }

    /// Accounts from the users file plus the bootstrap admin, if configured.
    pub fn load_accounts(&self) -> io::Result<Vec<UserAccount>> {
        let mut accounts = match &self.users_file {
            Some(path) => read_accounts(path)?,
            None => Vec::new(),
        };
        if let Some(password) = &self.admin_password {
            accounts.retain(|a| a.username != "admin");
            accounts.push(UserAccount {
                username: "admin".to_string(),
                password: password.clone(),
                role: Role::Admin,
            });
        }
        if accounts.is_empty() {
            log::warn!("No accounts configured; set BTMS_USERS or BTMS_ADMIN_PASSWORD to allow login");
        }
        Ok(accounts)
    }
}

/// Parse a JSON array of accounts.
pub fn read_accounts(path: &Path) -> io::Result<Vec<UserAccount>> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", path.display(), e),
        )
    })
}
