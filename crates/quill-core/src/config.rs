use home::home_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    constant::{CONFIG_DIR, CONFIG_ENV, CONFIG_FILE, DEFAULT_POSTS_FILE, PREVIEW_LEN},
    QuillError, QuillResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillConfig {
    /// Flat text file the posts are loaded from.
    pub posts_file: PathBuf,
    /// Characters of body shown for a collapsed post.
    pub preview_len: usize,
    /// User ID shown as "Me" in listings.
    /// Optional
    pub current_user: Option<String>,
    /// Directory holding the config file.
    #[serde(skip)]
    pub dirpath: PathBuf,
    /// The config file itself.
    #[serde(skip)]
    pub filepath: PathBuf,
}

impl Default for QuillConfig {
    fn default() -> Self {
        let dirpath = home_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default()
            .join(CONFIG_DIR);
        Self {
            posts_file: PathBuf::from(DEFAULT_POSTS_FILE),
            preview_len: PREVIEW_LEN,
            current_user: None,
            filepath: dirpath.join(CONFIG_FILE),
            dirpath,
        }
    }
}

impl QuillConfig {
    /// Config file to use when none is given explicitly: `$QUILLCONF` if set,
    /// `~/.quill/quill.toml` otherwise.
    pub fn default_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => QuillConfig::default().filepath,
        }
    }

    /// Load the config from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> QuillResult<Self> {
        let mut config = if path.exists() {
            let buf = std::fs::read_to_string(path)?;
            toml::from_str::<QuillConfig>(&buf).map_err(|e| {
                QuillError::config_error(format!("{}: {}", path.display(), e.message()))
            })?
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            QuillConfig::default()
        };
        config.set_filepath(path.to_path_buf())?;
        Ok(config)
    }

    /// Point the config at a new file; `dirpath` follows.
    pub fn set_filepath(&mut self, filepath: PathBuf) -> QuillResult<()> {
        self.dirpath = filepath
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| QuillError::config_error("Config path has no parent".into()))?;
        self.filepath = filepath;
        Ok(())
    }

    /// Write the config to `filepath`.
    pub fn save(&self) -> QuillResult<()> {
        if !self.dirpath.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.dirpath)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&self.filepath, content)?;
        Ok(())
    }
}
