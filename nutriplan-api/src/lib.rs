//! NutriPlan API Server
//!
//! REST layer for the NutriPlan dietitian dashboard.
//!
//! ## Endpoints
//!
//! ### Health
//! - GET /health - Service health check
//!
//! ### Clients
//! - GET /clients - List clients
//! - GET /clients/:client_id - Get client
//! - GET /clients/:client_id/appointments - Appointments for a client
//! - GET /clients/:client_id/plans - Diet plans for a client
//! - GET /clients/:client_id/reports - Progress reports for a client
//!
//! ### Appointments
//! - GET /appointments - List appointments
//! - GET /appointments/:appointment_id - Get appointment
//!
//! ### Diet plans
//! - GET /plans - List diet plans
//! - GET /plans/:plan_id - Get diet plan
//!
//! ### Reference data
//! - GET /foods - List foods
//! - GET /foods/:food_id - Get food
//! - GET /recipes - List recipes
//! - GET /recipes/:recipe_id - Get recipe
//!
//! ### Reports
//! - GET /reports - List reports
//! - GET /reports/:report_id - Get report
//!
//! ### Users
//! - GET /users - List dashboard users
//! - GET /users/:user_id - Get user
//!
//! ### Payments
//! - POST /payments/initiate - Forward a payment initiation to the
//!   configured downstream gateway and relay its reply
//!
//! The resource endpoints serve the fixture catalog from `nutriplan-core`;
//! the payment endpoint is the only path that performs an outbound call.

pub mod dto;
pub mod error;
pub mod gateway;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use gateway::{GatewayReply, PaymentGateway};
pub use routes::create_router;
pub use server::*;
pub use state::{ApiConfig, AppState};

/// API version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
