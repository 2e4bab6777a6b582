//! Remote catalog retrieval: GraphQL documents, wire shapes, and the HTTP client.

mod client;
pub mod queries;
pub mod wire;

pub use client::{CatalogClient, CatalogGateway};
pub use queries::{SortOrder, SortSpec};

/// Failure of a catalog request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, or timeout failure.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status without a GraphQL error payload.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The server answered with GraphQL `errors`.
    #[error("query failed: {0}")]
    Graphql(String),

    /// The body was not the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result alias for catalog requests.
pub type Result<T> = std::result::Result<T, FetchError>;
