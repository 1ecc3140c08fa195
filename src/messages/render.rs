//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::CommandLogEntry;
use crate::messages::ui_events::Panel;
use crate::models::{FanMode, PollState, RobotState};

/// Complete state needed by the UI to render
#[derive(Clone, Debug)]
pub struct RenderState {
    // Poll views
    pub state: PollState<RobotState>,
    pub logs: PollState<String>,

    // Control view
    pub powered: bool,
    pub fan_mode: FanMode,
    pub fan_speed: u8,
    /// Speed control is enabled exactly when the last submitted mode is static
    pub speed_control_enabled: bool,
    pub dispatch_error: Option<String>,
    pub command_log: Vec<CommandLogEntry>,

    // UI state
    pub active_panel: Panel,
    pub logs_scroll: u16,
    pub show_help: bool,

    // Target display
    pub base_url: String,
}

impl Default for RenderState {
    fn default() -> Self {
        use crate::constants::DEFAULT_BASE_URL;
        RenderState {
            state: PollState::new(),
            logs: PollState::new(),
            powered: true,
            fan_mode: FanMode::Proportional,
            fan_speed: 0,
            speed_control_enabled: false,
            dispatch_error: None,
            command_log: Vec::new(),
            active_panel: Panel::State,
            logs_scroll: 0,
            show_help: false,
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}
