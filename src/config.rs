use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::info;

use crate::{Error, Result};

const DEFAULT_DICTIONARY_PATH: &str = "./data/dictionary.txt";

/// How solutions are written to the session output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Invalid OUTPUT_FORMAT: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dictionary_path: String,
    pub output_format: OutputFormat,
}

pub fn load_config() -> Result<Config> {
    info!("Loading configuration");

    // A missing .env file is fine, the process environment still applies
    dotenv().ok();

    from_lookup(|key| env::var(key).ok())
}

/// Build a config from any key lookup, so tests never touch the process environment
fn from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let dictionary_path =
        lookup("DICTIONARY_FILE_PATH").unwrap_or_else(|| DEFAULT_DICTIONARY_PATH.to_string());

    let output_format = match lookup("OUTPUT_FORMAT") {
        Some(value) => value.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };

    Ok(Config {
        dictionary_path,
        output_format,
    })
}
