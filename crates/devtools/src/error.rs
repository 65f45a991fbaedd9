#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Decoding failed: {0}")]
    Decode(String),

    #[error("Conversion failed: {0}")]
    Conversion(String),
}
