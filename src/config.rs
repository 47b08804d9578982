//! Client configuration loaded from the environment.
//!
//! | Variable | Required | Meaning |
//! |---|---|---|
//! | `SAXO_ACCESS_TOKEN` | yes | OpenAPI bearer token |
//! | `SAXO_ACCOUNT_KEY` | yes | Account the orders are placed on |
//! | `SAXO_BASE_URL` | no | Gateway base URL (defaults to the SIM gateway) |

use std::env;

use crate::constants::SIM_BASE_URL;
use crate::error::{Result, SaxoError};

pub const ACCESS_TOKEN_VAR: &str = "SAXO_ACCESS_TOKEN";
pub const ACCOUNT_KEY_VAR: &str = "SAXO_ACCOUNT_KEY";
pub const BASE_URL_VAR: &str = "SAXO_BASE_URL";

/// Credentials and endpoint for a [`SaxoClient`](crate::client::SaxoClient).
#[derive(Clone)]
pub struct Config {
    pub access_token: String,
    pub account_key: String,
    pub base_url: String,
}

impl Config {
    /// Config for the SIM gateway.
    pub fn new(access_token: impl Into<String>, account_key: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            account_key: account_key.into(),
            base_url: SIM_BASE_URL.to_owned(),
        }
    }

    /// Read the config from `SAXO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let access_token = required(ACCESS_TOKEN_VAR)?;
        let account_key = required(ACCOUNT_KEY_VAR)?;
        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| SIM_BASE_URL.to_owned());
        Ok(Self {
            access_token,
            account_key,
            base_url,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("account_key", &self.account_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(SaxoError::Config(format!("{name} is not set"))),
    }
}
