#[derive(Debug, Fail)]
pub enum CheckError {
    #[fail(display = "Error contacting parking server: {}", _0)]
    Transport(#[fail(cause)] reqwest::Error),
    #[fail(display = "Parking server response was not valid JSON: {}", _0)]
    InvalidJson(#[fail(cause)] serde_json::Error),
    #[fail(display = "Malformed parking server response: {}", _0)]
    MalformedResult(String),
    #[fail(display = "Invalid configuration: {}", _0)]
    Config(String),
}

impl From<reqwest::Error> for CheckError {
    fn from(e: reqwest::Error) -> Self {
        CheckError::Transport(e)
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(e: serde_json::Error) -> Self {
        CheckError::InvalidJson(e)
    }
}
