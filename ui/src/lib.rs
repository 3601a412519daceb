//! Plateful UI Library
//!
//! This crate provides the Plateful user interface - a dashboard for
//! managing a food catalog backed by a remote REST service.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: Catalog service client abstraction (RestClient)
//! - [`components`]: UI components (dashboard, food cards, modal forms)
//! - [`state`]: Catalog list reconciliation

pub mod app;
pub mod client;
pub mod components;
pub mod state;

pub use app::App;
