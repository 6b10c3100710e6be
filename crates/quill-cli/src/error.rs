use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("ERROR: unable to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("ERROR: unable to encode json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ERROR: {msg}")]
    CustomError { msg: String },
}

impl CliError {
    pub fn custom_error(msg: String) -> Self {
        Self::CustomError { msg }
    }
}
