//! # Contact Resource API and its Remote Client
//!
//! This crate holds both ends of the `/contacts` HTTP surface. The server half is gated
//! behind the `server` feature so that client (WASM) builds never pull in axum, SQLx or
//! Tokio networking code.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | | [`ContactsClient`]: one HTTP call per operation, fixed error per operation |
//! | [`error`] | | [`ApiError`] (status mapping, JSON error body) and [`ClientError`] |
//! | [`config`] | `server` | Layered runtime [`config::Settings`] (defaults, `config.toml`, environment) |
//! | [`contacts`] | `server` | The five operations over a [`store::ContactStore`] |
//! | [`payload`] | `server` | Create/update body, required-field check, age coercion |
//! | [`routes`] | `server` | axum [`routes::router`] with CORS and request tracing |

pub mod client;
pub mod error;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod contacts;
#[cfg(feature = "server")]
pub mod payload;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(all(test, feature = "server"))]
mod test_support;

pub use client::ContactsClient;
pub use error::{ApiError, ClientError};
pub use store::{Contact, NewContact};

#[cfg(feature = "server")]
pub use routes::router;
