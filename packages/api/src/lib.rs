//! # API crate: typed client for the inventory backend
//!
//! Every HTTP call the frontend makes goes through [`ApiClient`]. The client
//! reads the bearer token from [`store::SessionStorage`] on each call, attaches
//! it, and turns backend failures into an [`ApiError`] whose `Display` is the
//! message the user should see.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`claims`] | Typed decoding of the JWT payload (user id for stock movements) |
//! | [`client`] | [`ApiClient`], auth headers, response classification |
//! | [`config`] | Backend base URL (`INVENTARIO_API_URL`, default `http://localhost:8000`) |
//! | [`error`] | [`ApiError`] and the crate [`Result`] alias |
//! | [`models`] | Wire types for every resource plus [`models::Page`] |
//! | [`services`] | One module per REST resource, each adding methods to [`ApiClient`] |
//! | [`session`] | [`session::Session`] state machine and the restore/login/logout flows |
//!
//! ## List results
//!
//! List endpoints return a bare JSON array. Anything else is rejected with
//! `"Invalid response format"`; arrays are sorted ascending by primary key and
//! wrapped in a [`models::Page`] whose `total` is the item count.

pub mod claims;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use claims::{ClaimsError, TokenClaims};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result, NETWORK_ERROR_MESSAGE};
pub use services::{
    DashboardSummary, DateRange, LoginResponse, ReportFile, ReportFormat, ReportKind,
    RECENT_MOVEMENTS,
};
pub use session::{Session, SessionAction};
