// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Substrate operations report [`RenderError`]; everything that touches the
//! filesystem or the settings file reports [`Error`]. Neither ever escapes a
//! notification property setter: the core logs and swallows render failures.

use crate::dom::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),
}

/// Failures reported by a rendering substrate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The node id does not belong to this substrate.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// `child` is not currently a child of `parent`.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Inserting `child` under `parent` would make a node its own ancestor.
    #[error("inserting {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
