//! Network messages - communication between App and Network layers

use crate::models::{ControlCommand, RobotState};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// POST a control command to the robot
    SendControl { id: u64, command: ControlCommand },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer (actor and pollers) to App layer.
///
/// Poll responses carry the sequence number of the request that produced
/// them; the App layer drops any response older than the newest one it has
/// already applied, so overlapping polls can never clobber fresher state.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Result of one `/state` poll
    State {
        seq: u64,
        result: Result<RobotState, String>,
    },
    /// Result of one `/logs` poll
    Logs {
        seq: u64,
        result: Result<String, String>,
    },
    /// Control command accepted by the robot
    ControlSuccess { id: u64, command: ControlCommand },
    /// Control command failed to send or was rejected
    ControlError {
        id: u64,
        command: ControlCommand,
        message: String,
    },
}
