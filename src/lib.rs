//! # Robomon
//!
//! A terminal dashboard for monitoring and controlling a robot over HTTP.
//!
//! ## Features
//! - Live robot state view polled every 100ms
//! - Robot log tail polled every second
//! - Power, reset, fan mode and fan speed controls
//! - Optimistic power toggling with an on-screen command log
//! - Stale poll responses discarded by sequence number
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{ControlCommand, ControlRequest, FanMode, PollState, RobotState};
pub use network::{NetworkActor, RobotClient};
