use crate::config::ConfigError;
use crate::dom::NodeId;
use crate::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BellowsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Failed to parse page: {0}")]
    Parse(String),
    #[error("Section root #{0} not found in page")]
    MissingRoot(String),
    #[error("Node {0} does not belong to this page")]
    UnknownNode(NodeId),
    #[error("Row template for '{base}' failed: {reason}")]
    RowTemplate { base: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BellowsError>;
