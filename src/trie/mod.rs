//! Prefix search index stored entirely in a [`GraphStore`](crate::graph::GraphStore)

mod index;
mod vertex;

pub use index::PrefixIndex;
pub use vertex::{Transition, Vertex, VertexPatch};

use crate::config::ConfigError;
use crate::graph::GraphError;
use thiserror::Error;

/// Errors raised by the prefix index
#[derive(Error, Debug)]
pub enum TrieError {
    /// The root vertex created at construction could not be located
    #[error("root vertex {root_char:?} not found")]
    RootMissing { root_char: char },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type TrieResult<T> = Result<T, TrieError>;
