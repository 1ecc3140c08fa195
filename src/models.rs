use serde::{Deserialize, Serialize};

/// Fan regulation mode reported and accepted by the robot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FanMode {
    Static,
    #[default]
    Proportional,
}

impl FanMode {
    pub fn as_str(&self) -> &str {
        match self {
            FanMode::Static => "static",
            FanMode::Proportional => "proportional",
        }
    }

    pub fn next(&self) -> FanMode {
        match self {
            FanMode::Static => FanMode::Proportional,
            FanMode::Proportional => FanMode::Static,
        }
    }
}

/// Snapshot of the robot as reported by `GET /state`.
///
/// Replaced wholesale on every successful poll; never merged field-by-field.
/// `status` stays a free-form string because the backend reports more values
/// than the documented online/offline pair (idle, running, error, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotState {
    pub status: String,
    pub temperature: f64,
    pub fan_mode: FanMode,
    pub fan_speed: u8,
    pub power: f64,
    pub uptime: u64,
}

/// A discrete control action triggered by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    On,
    Off,
    Reset,
    SetFanMode(FanMode),
    SetFanSpeed(u8),
}

impl ControlCommand {
    /// Wire form of the `action` field
    pub fn action_str(&self) -> &str {
        match self {
            ControlCommand::On => "on",
            ControlCommand::Off => "off",
            ControlCommand::Reset => "reset",
            ControlCommand::SetFanMode(_) => "fan",
            ControlCommand::SetFanSpeed(_) => "fan_speed",
        }
    }

    /// Build the JSON body POSTed to `/control`
    pub fn to_request(&self) -> ControlRequest {
        ControlRequest {
            action: self.action_str().to_string(),
            fan_mode: match self {
                ControlCommand::SetFanMode(mode) => Some(*mode),
                _ => None,
            },
            fan_speed: match self {
                ControlCommand::SetFanSpeed(speed) => Some(*speed),
                _ => None,
            },
        }
    }

    /// Human-readable form for the on-screen command log
    pub fn describe(&self) -> String {
        match self {
            ControlCommand::On => String::from("turn on"),
            ControlCommand::Off => String::from("turn off"),
            ControlCommand::Reset => String::from("reset"),
            ControlCommand::SetFanMode(mode) => format!("set fan mode to {}", mode.as_str()),
            ControlCommand::SetFanSpeed(speed) => format!("set fan speed to {}%", speed),
        }
    }
}

/// Serialized body of `POST /control`.
///
/// `fan_mode` is present only for the fan-mode action and `fan_speed` only
/// for the fan-speed action; absent fields are omitted, not null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlRequest {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_mode: Option<FanMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_speed: Option<u8>,
}

/// Poll lifecycle wrapper owned by each poller view.
///
/// `loading` is true only until the first result (success or failure) lands.
/// A failed refresh sets `error` but never clears previously fetched data,
/// so the last-known-good reading stays visible under the error notice.
#[derive(Clone, Debug, PartialEq)]
pub struct PollState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> PollState<T> {
    pub fn new() -> Self {
        PollState {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// Replace the snapshot wholesale and clear any error
    pub fn apply_success(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    /// Record a fetch failure, keeping whatever data was already there
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }
}

impl<T> Default for PollState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> RobotState {
        RobotState {
            status: String::from("online"),
            temperature: 25.0,
            fan_mode: FanMode::Proportional,
            fan_speed: 50,
            power: 100.0,
            uptime: 3600,
        }
    }

    #[test]
    fn test_state_deserializes_from_wire_json() {
        let body = r#"{"status":"online","temperature":25,"fan_mode":"proportional","fan_speed":50,"power":100,"uptime":3600}"#;
        let state: RobotState = serde_json::from_str(body).unwrap();
        assert_eq!(state, sample_state());
    }

    #[test]
    fn test_power_commands_serialize_without_fan_fields() {
        let body = serde_json::to_string(&ControlCommand::Off.to_request()).unwrap();
        assert_eq!(body, r#"{"action":"off"}"#);
        let body = serde_json::to_string(&ControlCommand::On.to_request()).unwrap();
        assert_eq!(body, r#"{"action":"on"}"#);
        let body = serde_json::to_string(&ControlCommand::Reset.to_request()).unwrap();
        assert_eq!(body, r#"{"action":"reset"}"#);
    }

    #[test]
    fn test_fan_mode_command_serializes_mode_only() {
        let request = ControlCommand::SetFanMode(FanMode::Static).to_request();
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"action":"fan","fan_mode":"static"}"#);
    }

    #[test]
    fn test_fan_speed_command_serializes_speed_only() {
        let request = ControlCommand::SetFanSpeed(80).to_request();
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"action":"fan_speed","fan_speed":80}"#);
    }

    #[test]
    fn test_repeated_commands_serialize_identically() {
        // No client-side deduplication: two sends, two identical bodies
        let first = serde_json::to_string(&ControlCommand::SetFanSpeed(80).to_request()).unwrap();
        let second = serde_json::to_string(&ControlCommand::SetFanSpeed(80).to_request()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_poll_state_success_replaces_and_clears_error() {
        let mut poll: PollState<RobotState> = PollState::new();
        assert!(poll.loading);
        poll.apply_failure("Error fetching robot state");
        poll.apply_success(sample_state());
        assert_eq!(poll.data, Some(sample_state()));
        assert_eq!(poll.error, None);
        assert!(!poll.loading);
    }

    #[test]
    fn test_poll_state_failure_keeps_previous_data() {
        let mut poll: PollState<RobotState> = PollState::new();
        poll.apply_success(sample_state());
        poll.apply_failure("Error fetching robot state");
        assert_eq!(poll.data, Some(sample_state()));
        assert_eq!(poll.error.as_deref(), Some("Error fetching robot state"));
    }

    #[test]
    fn test_poll_state_first_failure_clears_loading() {
        let mut poll: PollState<String> = PollState::new();
        poll.apply_failure("Error fetching robot logs");
        assert!(!poll.loading);
        assert_eq!(poll.data, None);
    }
}
