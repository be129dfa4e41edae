pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("network error {0}")]
    Network(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed json {0}")]
    Json(String),
}

impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Self {
        Error::Network(e.to_string())
    }
}

impl From<serde_json_wasm::de::Error> for Error {
    fn from(e: serde_json_wasm::de::Error) -> Self {
        Error::Json(e.to_string())
    }
}

impl From<serde_json_wasm::ser::Error> for Error {
    fn from(e: serde_json_wasm::ser::Error) -> Self {
        Error::Json(e.to_string())
    }
}
