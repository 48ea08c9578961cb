//! # API crate: REST client for the blog backend
//!
//! Every view talks to the backend through [`ApiClient`]. The client is a thin
//! wrapper around `reqwest`: it prefixes paths with the configured base URL,
//! attaches the session's bearer token and classifies failures into
//! [`ApiError`]. Nothing is cached and nothing is retried.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `client` | [`ApiClient`], request building and response checking |
//! | `auth` | `login`, `register` |
//! | `articles` | `list_articles`, `get_article`, `create_article`, `update_article`, `delete_article` |
//! | [`error`] | [`ApiError`] and endpoint-aware status classification |
//!
//! ## Endpoints
//!
//! | Call | Request |
//! |------|---------|
//! | `login` | `POST /auth/login` |
//! | `register` | `POST /auth/register` |
//! | `list_articles` | `GET /articles?page={n}&size={n}` |
//! | `get_article` | `GET /articles/{id}` |
//! | `create_article` | `POST /articles` |
//! | `update_article` | `PUT /articles/{id}` |
//! | `delete_article` | `DELETE /articles/{id}` |

mod articles;
mod auth;
mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, Endpoint};

pub use store::{Article, ArticlePage, ArticleRequest, ArticleStatus, RegisterRequest, Session, User};
