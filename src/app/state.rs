//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::Panel;
use crate::messages::RenderState;
use crate::models::{FanMode, PollState, RobotState};

/// What a command log line records
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Sent,
    Accepted,
    Failed,
}

/// A single entry in the on-screen command log
#[derive(Clone, Debug)]
pub struct CommandLogEntry {
    pub outcome: CommandOutcome,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl CommandLogEntry {
    pub fn new(outcome: CommandOutcome, content: impl Into<String>) -> Self {
        CommandLogEntry {
            outcome,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Poll views
    pub state_poll: PollState<RobotState>,
    pub logs_poll: PollState<String>,

    // Highest poll sequence numbers already applied, per endpoint.
    // Responses at or below these are stale and get dropped.
    pub last_state_seq: u64,
    pub last_logs_seq: u64,

    // Control view
    pub powered: bool,
    pub fan_mode: FanMode,
    pub fan_speed: u8,
    pub speed_control_enabled: bool,
    pub dispatch_error: Option<String>,
    pub command_log: Vec<CommandLogEntry>,
    pub next_command_id: u64,

    // UI state
    pub active_panel: Panel,
    pub logs_scroll: u16,
    pub show_help: bool,

    // Target display
    pub base_url: String,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        AppState {
            state_poll: PollState::new(),
            logs_poll: PollState::new(),
            last_state_seq: 0,
            last_logs_seq: 0,
            powered: true,
            fan_mode: FanMode::Proportional,
            fan_speed: 0,
            speed_control_enabled: false,
            dispatch_error: None,
            command_log: Vec::new(),
            next_command_id: 1,
            active_panel: Panel::State,
            logs_scroll: 0,
            show_help: false,
            base_url: base_url.into(),
        }
    }

    /// Generate a unique command ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_command_id;
        self.next_command_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            state: self.state_poll.clone(),
            logs: self.logs_poll.clone(),
            powered: self.powered,
            fan_mode: self.fan_mode,
            fan_speed: self.fan_speed,
            speed_control_enabled: self.speed_control_enabled,
            dispatch_error: self.dispatch_error.clone(),
            command_log: self.command_log.clone(),
            active_panel: self.active_panel,
            logs_scroll: self.logs_scroll,
            show_help: self.show_help,
            base_url: self.base_url.clone(),
        }
    }
}
