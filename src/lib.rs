//! Server side of the clean energy navigator front-end.
//!
//! Serves the static page bundle and proxies the pages' JSON intake
//! (`/api/chatbot`, `/api/sustainability`, `/api/recommendation`) to the
//! computation backend, relaying its answer or error.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
