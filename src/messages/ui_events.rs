//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,

    // Power actions
    PowerToggle,
    TurnOn,
    TurnOff,
    Reset,

    // Fan actions
    CycleFanMode,
    ApplyFanMode,
    SpeedUp,
    SpeedDown,
    ApplyFanSpeed,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    State,
    Controls,
    Logs,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::State => Panel::Controls,
            Panel::Controls => Panel::Logs,
            Panel::Logs => Panel::State,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::State => Panel::Logs,
            Panel::Controls => Panel::State,
            Panel::Logs => Panel::Controls,
        }
    }
}

/// Map a terminal key event to a UI event
pub fn key_to_ui_event(key: KeyEvent, active_panel: Panel, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::BackTab => Some(UiEvent::PrevPanel),

        KeyCode::Char('p') => Some(UiEvent::PowerToggle),
        KeyCode::Char('o') => Some(UiEvent::TurnOn),
        KeyCode::Char('x') => Some(UiEvent::TurnOff),
        KeyCode::Char('r') => Some(UiEvent::Reset),

        KeyCode::Char('m') => Some(UiEvent::CycleFanMode),
        KeyCode::Char('f') => Some(UiEvent::ApplyFanMode),
        KeyCode::Char('s') => Some(UiEvent::ApplyFanSpeed),
        KeyCode::Left | KeyCode::Char('-') => Some(UiEvent::SpeedDown),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Some(UiEvent::SpeedUp),

        KeyCode::Up if active_panel == Panel::Logs => Some(UiEvent::ScrollUp),
        KeyCode::Down if active_panel == Panel::Logs => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_power_toggle_key() {
        let event = key_to_ui_event(press(KeyCode::Char('p')), Panel::Controls, false);
        assert_eq!(event, Some(UiEvent::PowerToggle));
    }

    #[test]
    fn test_any_key_closes_help() {
        let event = key_to_ui_event(press(KeyCode::Char('p')), Panel::State, true);
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_scroll_only_in_logs_panel() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Up), Panel::Logs, false),
            Some(UiEvent::ScrollUp)
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Up), Panel::State, false), None);
    }

    #[test]
    fn test_panel_cycle_wraps() {
        assert_eq!(Panel::Logs.next(), Panel::State);
        assert_eq!(Panel::State.prev(), Panel::Logs);
    }
}
