//! Crate error types using thiserror
//!
//! Error hierarchy:
//! - RegistryError: upstream registry (AUR RPC) communication failures
//! - SourceError: inventory provider failures (local and sync sources)
//!
//! The comparator and the reconciliation engine surface no errors of their
//! own; everything here originates in a collaborator and is propagated to
//! the caller unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level crate error
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Inventory source related errors
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors related to upstream registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network request failed
    #[error("failed to query {registry}: {message}")]
    Network { registry: String, message: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimited { registry: String },

    /// Timeout
    #[error("timeout while querying {registry}")]
    Timeout { registry: String },

    /// Response body could not be decoded
    #[error("invalid response from {registry}: {message}")]
    InvalidResponse { registry: String, message: String },

    /// The registry answered with an RPC-level error envelope
    #[error("{registry} reported an error: {message}")]
    Rpc { registry: String, message: String },
}

/// Errors related to inventory providers
#[derive(Error, Debug)]
pub enum SourceError {
    /// A configured repository has no database behind it
    #[error("no database found for repository '{repository}'")]
    MissingRepository { repository: String },

    /// The package store could not be opened
    #[error("failed to open package store at {path}: {message}")]
    Store { path: PathBuf, message: String },

    /// Underlying IO failure
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Creates a new Network error
    pub fn network(registry: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Network {
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimited error
    pub fn rate_limited(registry: impl Into<String>) -> Self {
        RegistryError::RateLimited {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(registry: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Rpc error
    pub fn rpc(registry: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Rpc {
            registry: registry.into(),
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Creates a new MissingRepository error
    pub fn missing_repository(repository: impl Into<String>) -> Self {
        SourceError::MissingRepository {
            repository: repository.into(),
        }
    }

    /// Creates a new Store error
    pub fn store(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SourceError::Store {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }
}
