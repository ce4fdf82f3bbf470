use crate::config::{parse_base_url, Config, DEFAULT_BASE_URL};
use crate::error::{Result, TeamsError};
use crate::prompt::{self, is_yes};

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let mut prompter = prompt::stdin();

    if config_path.exists() {
        let answer = prompter.read_line(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.as_deref().is_some_and(is_yes) {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Teams CLI Configuration");
    println!("=======================\n");

    let base_url = prompter
        .read_line(&format!("API base URL [{DEFAULT_BASE_URL}]: "))?
        .unwrap_or_default();
    let base_url = match base_url.trim() {
        "" => DEFAULT_BASE_URL.to_string(),
        url => url.to_string(),
    };
    parse_base_url(&base_url)?;

    let surface = prompter
        .read_line("Show list failures as errors instead of an empty list? [y/N] ")?
        .unwrap_or_default();

    let config = Config {
        base_url: Some(base_url),
        surface_list_errors: is_yes(&surface),
    };
    let contents = toml::to_string(&config).map_err(|e| TeamsError::Failed(e.to_string()))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TeamsError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, contents).map_err(|e| TeamsError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'teams' commands!");

    Ok(())
}
