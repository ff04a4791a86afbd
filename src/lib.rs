//! A GraphQL API over a small in-memory social network: users, posts,
//! comments, likes and follows.
//!
//! [`store::SocialGraph`] owns the data and exposes the operations;
//! [`graphql`] maps them onto the schema and [`handlers`] serves that schema
//! over HTTP with actix-web.

pub mod config;
pub mod core;
pub mod follow;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod posts;
pub mod store;
pub mod users;

pub use crate::core::errors::{ApiError, ApiResult};
pub use graphql::{build_schema, SocialSchema};
pub use store::SocialGraph;
