//! # Party Planner
//!
//! A client for a remote party (event) service: browse upcoming parties,
//! see who is attending, add parties and remove them.
//!
//! ## Features
//!
//! - **Single state owner**: every change goes through [`AppState::update`]
//! - **Whole-page render**: the page is rebuilt from state after each change
//! - **Two front-ends**: a local HTML page server and a command-line tool
//! - **Visible failures**: request errors appear in an error banner
//!
//! ## Modules
//!
//! - [`model`]: Party, guest and RSVP records, form parsing
//! - [`gateway`]: HTTP client for the remote service
//! - [`state`]: Application state and its transitions
//! - [`view`]: View tree and renderers
//! - [`planner`]: Orchestrates gateway calls, state updates and renders
//! - [`server`]: Local page server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use party_planner::{Config, HttpGateway, Planner};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let planner = Planner::new(Arc::new(HttpGateway::new(&config.gateway)?));
//!
//!     planner.bootstrap().await?;
//!     planner.select_party(1).await?;
//!
//!     println!("{}", party_planner::view::text::render(&planner.page().await));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod gateway;
pub mod model;
pub mod planner;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod view;

// Re-export top-level types for convenience
pub use config::{Config, ConfigError, GatewayConfig, LoggingConfig, ServerConfig};

pub use gateway::{Endpoints, GatewayError, GatewayResult, HttpGateway, PartyGateway};

pub use model::{DraftError, Guest, NewPartyForm, Party, PartyDraft, PartyId, Rsvp};

pub use planner::{Planner, PlannerError, PlannerResult};

pub use server::{build_router, serve, ServerError, ServerState};

pub use state::{AppState, Msg, Operation};
