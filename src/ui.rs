//! UI helpers - pure formatting and styling functions for the dashboard

use ratatui::style::Color;

use crate::models::{PollState, RobotState};

/// Color for a reported robot status string
pub fn status_color(status: &str) -> Color {
    match status {
        "online" | "running" => Color::Green,
        "idle" => Color::Yellow,
        "offline" => Color::DarkGray,
        "error" => Color::Red,
        _ => Color::White,
    }
}

/// Text lines for the state panel.
///
/// Loading shows a placeholder until the first result lands. After that the
/// error line (if any) sits above the last-known-good snapshot; with no
/// snapshot yet, the error is all there is.
pub fn state_lines(poll: &PollState<RobotState>) -> Vec<String> {
    let mut lines = Vec::new();
    if poll.loading {
        lines.push(String::from("Loading..."));
        return lines;
    }
    if let Some(error) = &poll.error {
        lines.push(error.clone());
    }
    if let Some(state) = &poll.data {
        lines.push(format!("Status: {}", state.status));
        lines.push(format!("Temperature: {}°C", state.temperature));
        lines.push(format!("Fan mode: {}", state.fan_mode.as_str()));
        lines.push(format!("Fan speed: {}%", state.fan_speed));
        lines.push(format!("Power: {}W", state.power));
        lines.push(format!("Uptime: {}s", state.uptime));
    }
    lines
}

/// Text lines for the logs panel, one per log line, verbatim
pub fn log_lines(poll: &PollState<String>) -> Vec<String> {
    let mut lines = Vec::new();
    if poll.loading {
        lines.push(String::from("Loading..."));
        return lines;
    }
    if let Some(error) = &poll.error {
        lines.push(error.clone());
    }
    if let Some(logs) = &poll.data {
        lines.extend(logs.lines().map(String::from));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FanMode;

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

    #[test]
    fn test_state_lines_render_all_fields() {
        let mut poll = PollState::new();
        poll.apply_success(online_state());
        let lines = state_lines(&poll);
        assert_eq!(
            lines,
            vec![
                "Status: online",
                "Temperature: 25°C",
                "Fan mode: proportional",
                "Fan speed: 50%",
                "Power: 100W",
                "Uptime: 3600s",
            ]
        );
    }

    #[test]
    fn test_state_lines_error_without_data_has_no_fields() {
        let mut poll: PollState<RobotState> = PollState::new();
        poll.apply_failure("Error fetching robot state");
        let lines = state_lines(&poll);
        assert_eq!(lines, vec!["Error fetching robot state"]);
    }

    #[test]
    fn test_state_lines_keep_stale_data_under_error() {
        let mut poll = PollState::new();
        poll.apply_success(online_state());
        poll.apply_failure("Error fetching robot state");
        let lines = state_lines(&poll);
        assert_eq!(lines[0], "Error fetching robot state");
        assert_eq!(lines[1], "Status: online");
    }

    #[test]
    fn test_log_lines_render_verbatim() {
        let mut poll = PollState::new();
        poll.apply_success(String::from("Log 1: Robot started\nLog 2: Robot running"));
        let lines = log_lines(&poll);
        assert_eq!(lines, vec!["Log 1: Robot started", "Log 2: Robot running"]);
    }

    #[test]
    fn test_loading_placeholder_before_first_result() {
        let poll: PollState<String> = PollState::new();
        assert_eq!(log_lines(&poll), vec!["Loading..."]);
    }
}
