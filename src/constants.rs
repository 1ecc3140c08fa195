//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Environment variable overriding the robot API base URL
pub const BASE_URL_ENV: &str = "ROBOT_API_URL";

/// Default base URL for the robot API
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// How often the state poller re-fetches `/state`
pub const STATE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How often the logs poller re-fetches `/logs`
pub const LOGS_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Fan speed adjustment step for the slider keys
pub const FAN_SPEED_STEP: u8 = 5;

/// User-facing error shown when a `/state` poll fails
pub const STATE_FETCH_ERROR: &str = "Error fetching robot state";

/// User-facing error shown when a `/logs` poll fails
pub const LOGS_FETCH_ERROR: &str = "Error fetching robot logs";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Robomon";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
