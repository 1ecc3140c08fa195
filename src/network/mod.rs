//! Network layer - robot API calls, poll loops and command dispatch
//!
//! The Network actor receives control commands and sends back responses;
//! the poll loops push state and log snapshots on their own timers.

pub mod actor;
pub mod client;
pub mod poller;

pub use actor::NetworkActor;
pub use client::RobotClient;
