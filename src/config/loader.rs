use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::StatsConfig;

pub const CONFIG_FILE_NAME: &str = ".qstats.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parses a `.qstats.toml` document.
pub fn parse_config(contents: &str) -> Result<StatsConfig, String> {
    toml::from_str::<StatsConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<StatsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(mut config) => {
            log::debug!("Loaded config from {}", config_path.display());
            config.base_dir = config_path.parent().map(Path::to_path_buf);
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // A missing file just means no config at this level
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub(crate) fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Finds the nearest `.qstats.toml` at or above `start`.
pub fn load_config_from(start: &Path) -> StatsConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} found within {} directories. Using defaults.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            StatsConfig::default()
        })
}

/// Finds the nearest `.qstats.toml` at or above the working directory.
pub fn load_config() -> StatsConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            StatsConfig::default()
        }
    }
}
