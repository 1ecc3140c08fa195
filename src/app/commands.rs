//! Command handlers - business logic for processing UI events

use tracing::{debug, info, warn};

use crate::app::state::{CommandLogEntry, CommandOutcome};
use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::ControlCommand;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    pub fn scroll_up(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_add(1);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Power actions
    // ========================

    /// Toggle power optimistically: the local flag flips before the POST
    /// resolves and is not rolled back on failure.
    pub fn power_toggle(&mut self) -> NetworkCommand {
        self.powered = !self.powered;
        let command = if self.powered {
            ControlCommand::On
        } else {
            ControlCommand::Off
        };
        self.dispatch(command)
    }

    pub fn turn_on(&mut self) -> NetworkCommand {
        self.powered = true;
        self.dispatch(ControlCommand::On)
    }

    pub fn turn_off(&mut self) -> NetworkCommand {
        self.powered = false;
        self.dispatch(ControlCommand::Off)
    }

    pub fn reset(&mut self) -> NetworkCommand {
        self.dispatch(ControlCommand::Reset)
    }

    // ========================
    // Fan actions
    // ========================

    /// Cycle the locally selected fan mode; nothing is sent until applied
    pub fn cycle_fan_mode(&mut self) {
        self.fan_mode = self.fan_mode.next();
    }

    /// Submit the selected fan mode. The speed control gate is derived
    /// synchronously from the mode just sent, not from any acknowledgment.
    pub fn apply_fan_mode(&mut self) -> NetworkCommand {
        self.speed_control_enabled = self.fan_mode == crate::models::FanMode::Static;
        self.dispatch(ControlCommand::SetFanMode(self.fan_mode))
    }

    pub fn speed_up(&mut self) {
        if self.speed_control_enabled {
            self.fan_speed = (self.fan_speed + crate::constants::FAN_SPEED_STEP).min(100);
        }
    }

    pub fn speed_down(&mut self) {
        if self.speed_control_enabled {
            self.fan_speed = self.fan_speed.saturating_sub(crate::constants::FAN_SPEED_STEP);
        }
    }

    /// Submit the selected fan speed, if the speed control is enabled
    pub fn apply_fan_speed(&mut self) -> Option<NetworkCommand> {
        if !self.speed_control_enabled {
            return None;
        }
        Some(self.dispatch(ControlCommand::SetFanSpeed(self.fan_speed)))
    }

    /// Build the network command for a control action and log the send
    fn dispatch(&mut self, command: ControlCommand) -> NetworkCommand {
        let id = self.next_id();
        info!(id, action = command.action_str(), "Dispatching control command");
        self.command_log
            .push(CommandLogEntry::new(CommandOutcome::Sent, command.describe()));
        NetworkCommand::SendControl { id, command }
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::State { seq, result } => {
                // An older poll must never clobber a newer snapshot
                if seq <= self.last_state_seq {
                    debug!(seq, applied = self.last_state_seq, "Dropping stale state response");
                    return;
                }
                self.last_state_seq = seq;
                match result {
                    Ok(state) => self.state_poll.apply_success(state),
                    Err(message) => self.state_poll.apply_failure(message),
                }
            }
            NetworkResponse::Logs { seq, result } => {
                if seq <= self.last_logs_seq {
                    debug!(seq, applied = self.last_logs_seq, "Dropping stale logs response");
                    return;
                }
                self.last_logs_seq = seq;
                match result {
                    Ok(logs) => self.logs_poll.apply_success(logs),
                    Err(message) => self.logs_poll.apply_failure(message),
                }
            }
            NetworkResponse::ControlSuccess { id, command } => {
                info!(id, action = command.action_str(), "Control command accepted");
                self.dispatch_error = None;
                self.command_log.push(CommandLogEntry::new(
                    CommandOutcome::Accepted,
                    command.describe(),
                ));
            }
            NetworkResponse::ControlError { id, command, message } => {
                warn!(id, action = command.action_str(), %message, "Control command failed");
                self.command_log
                    .push(CommandLogEntry::new(CommandOutcome::Failed, message.clone()));
                self.dispatch_error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FanMode, RobotState};

    fn app() -> AppState {
        AppState::new("http://127.0.0.1:8000")
    }

    fn online_state() -> RobotState {
        RobotState {
            status: String::from("online"),
            temperature: 25.0,
            fan_mode: FanMode::Proportional,
            fan_speed: 50,
            power: 100.0,
            uptime: 3600,
        }
    }

    fn sent_command(cmd: NetworkCommand) -> ControlCommand {
        match cmd {
            NetworkCommand::SendControl { command, .. } => command,
            other => panic!("expected SendControl, got {:?}", other),
        }
    }

    #[test]
    fn test_state_response_replaces_snapshot() {
        let mut state = app();
        state.handle_response(NetworkResponse::State {
            seq: 1,
            result: Ok(online_state()),
        });
        assert_eq!(state.state_poll.data, Some(online_state()));
        assert_eq!(state.state_poll.error, None);
        assert!(!state.state_poll.loading);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_snapshot() {
        let mut state = app();
        state.handle_response(NetworkResponse::State {
            seq: 1,
            result: Ok(online_state()),
        });
        state.handle_response(NetworkResponse::State {
            seq: 2,
            result: Err(String::from("Error fetching robot state")),
        });
        assert_eq!(state.state_poll.data, Some(online_state()));
        assert_eq!(
            state.state_poll.error.as_deref(),
            Some("Error fetching robot state")
        );
    }

    #[test]
    fn test_first_fetch_failure_shows_only_error() {
        let mut state = app();
        state.handle_response(NetworkResponse::State {
            seq: 1,
            result: Err(String::from("Error fetching robot state")),
        });
        assert_eq!(state.state_poll.data, None);
        assert!(!state.state_poll.loading);
        assert!(state.state_poll.error.is_some());
    }

    #[test]
    fn test_stale_state_response_is_dropped() {
        let mut state = app();
        let mut newer = online_state();
        newer.uptime = 3700;
        state.handle_response(NetworkResponse::State {
            seq: 5,
            result: Ok(newer.clone()),
        });
        // A slower request issued earlier resolves afterwards
        state.handle_response(NetworkResponse::State {
            seq: 3,
            result: Ok(online_state()),
        });
        assert_eq!(state.state_poll.data, Some(newer));
    }

    #[test]
    fn test_stale_logs_error_cannot_mask_newer_data() {
        let mut state = app();
        state.handle_response(NetworkResponse::Logs {
            seq: 2,
            result: Ok(String::from("Log 1: Robot started")),
        });
        state.handle_response(NetworkResponse::Logs {
            seq: 1,
            result: Err(String::from("Error fetching robot logs")),
        });
        assert_eq!(state.logs_poll.error, None);
        assert_eq!(
            state.logs_poll.data.as_deref(),
            Some("Log 1: Robot started")
        );
    }

    #[test]
    fn test_logs_response_replaces_text_wholesale() {
        let mut state = app();
        state.handle_response(NetworkResponse::Logs {
            seq: 1,
            result: Ok(String::from("Log 1: Robot started")),
        });
        state.handle_response(NetworkResponse::Logs {
            seq: 2,
            result: Ok(String::from("Log 1: Robot started\nLog 2: Robot running")),
        });
        assert_eq!(
            state.logs_poll.data.as_deref(),
            Some("Log 1: Robot started\nLog 2: Robot running")
        );
    }

    #[test]
    fn test_power_toggle_flips_before_send() {
        let mut state = app();
        assert!(state.powered);
        let command = sent_command(state.power_toggle());
        // Flag flipped locally regardless of what the network will say
        assert!(!state.powered);
        assert_eq!(command, ControlCommand::Off);

        let command = sent_command(state.power_toggle());
        assert!(state.powered);
        assert_eq!(command, ControlCommand::On);
    }

    #[test]
    fn test_power_toggle_not_rolled_back_on_failure() {
        let mut state = app();
        let cmd = state.power_toggle();
        let (id, command) = match cmd {
            NetworkCommand::SendControl { id, command } => (id, command),
            other => panic!("expected SendControl, got {:?}", other),
        };
        state.handle_response(NetworkResponse::ControlError {
            id,
            command,
            message: String::from("Error sending command: connection refused"),
        });
        // Optimistic update stands; only the error line appears
        assert!(!state.powered);
        assert!(state.dispatch_error.is_some());
    }

    #[test]
    fn test_apply_static_mode_enables_speed_control() {
        let mut state = app();
        assert!(!state.speed_control_enabled);
        state.cycle_fan_mode();
        assert_eq!(state.fan_mode, FanMode::Static);
        let command = sent_command(state.apply_fan_mode());
        assert_eq!(command, ControlCommand::SetFanMode(FanMode::Static));
        assert!(state.speed_control_enabled);
    }

    #[test]
    fn test_apply_proportional_mode_disables_speed_control() {
        let mut state = app();
        state.cycle_fan_mode();
        state.apply_fan_mode();
        state.cycle_fan_mode();
        assert_eq!(state.fan_mode, FanMode::Proportional);
        state.apply_fan_mode();
        assert!(!state.speed_control_enabled);
        assert!(state.apply_fan_speed().is_none());
    }

    #[test]
    fn test_apply_fan_speed_sends_selected_value() {
        let mut state = app();
        state.cycle_fan_mode();
        state.apply_fan_mode();
        for _ in 0..16 {
            state.speed_up();
        }
        assert_eq!(state.fan_speed, 80);
        let command = sent_command(state.apply_fan_speed().unwrap());
        assert_eq!(command, ControlCommand::SetFanSpeed(80));
    }

    #[test]
    fn test_speed_clamps_to_percent_range() {
        let mut state = app();
        state.cycle_fan_mode();
        state.apply_fan_mode();
        for _ in 0..30 {
            state.speed_up();
        }
        assert_eq!(state.fan_speed, 100);
        for _ in 0..30 {
            state.speed_down();
        }
        assert_eq!(state.fan_speed, 0);
    }

    #[test]
    fn test_control_success_clears_dispatch_error() {
        let mut state = app();
        let cmd = state.reset();
        let (id, command) = match cmd {
            NetworkCommand::SendControl { id, command } => (id, command),
            other => panic!("expected SendControl, got {:?}", other),
        };
        state.dispatch_error = Some(String::from("Error sending command: timeout"));
        state.handle_response(NetworkResponse::ControlSuccess { id, command });
        assert_eq!(state.dispatch_error, None);
    }

    #[test]
    fn test_command_ids_are_unique_per_send() {
        let mut state = app();
        let first = state.power_toggle();
        let second = state.power_toggle();
        let id_of = |cmd: &NetworkCommand| match cmd {
            NetworkCommand::SendControl { id, .. } => *id,
            other => panic!("expected SendControl, got {:?}", other),
        };
        assert_ne!(id_of(&first), id_of(&second));
    }
}
