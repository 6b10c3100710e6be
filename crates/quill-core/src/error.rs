use thiserror::Error;

pub type QuillResult<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum QuillError {
    /// A post with this ID is already present in the store.
    #[error("Post with ID {id} already exists in the store")]
    DuplicateId { id: String },
    /// The requested/specified ID does not exist.
    #[error("Post does not exist with the given ID: {id}")]
    InvalidId { id: String },
    /// The config file exists but could not be understood.
    #[error("Config error: {msg}")]
    ConfigError { msg: String },
}

impl QuillError {
    pub fn config_error(msg: String) -> Self {
        Self::ConfigError { msg }
    }

    pub fn invalid_id(id: &str) -> Self {
        Self::InvalidId { id: id.into() }
    }
}
