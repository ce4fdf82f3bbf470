use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TeamsError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5015";

const BASE_URL_ENV: &str = "TEAMS_API_URL";
const SURFACE_LIST_ERRORS_ENV: &str = "TEAMS_SURFACE_LIST_ERRORS";

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct Config {
    pub base_url: Option<String>,
    /// Report list failures in the error banner instead of showing an empty list
    #[serde(default)]
    pub surface_list_errors: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| TeamsError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| TeamsError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "teams")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(TeamsError::NoConfigDir)
    }

    /// Resolve the API host: explicit flag, then env var, then config file, then default
    pub fn base_url(&self, explicit: Option<&str>) -> Result<Url> {
        let env = std::env::var(BASE_URL_ENV).ok();
        let raw = explicit
            .map(String::from)
            .or(env)
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        parse_base_url(&raw)
    }

    pub fn surface_list_errors(&self) -> bool {
        match std::env::var(SURFACE_LIST_ERRORS_ENV) {
            Ok(value) => matches!(value.trim(), "1" | "true" | "yes"),
            Err(_) => self.surface_list_errors,
        }
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|_| TeamsError::InvalidUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(TeamsError::InvalidUrl(raw.to_string())),
    }
}
