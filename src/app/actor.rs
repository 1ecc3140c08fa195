//! App actor - message loop processing UI events and network responses

use tokio::sync::{mpsc, watch};

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
    poller_shutdown: watch::Sender<bool>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
        poller_shutdown: watch::Sender<bool>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
            poller_shutdown,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit: stop the poll timers, then the network actor
                        let _ = self.poller_shutdown.send(true);
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Panel navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Power actions
            UiEvent::PowerToggle => {
                let cmd = self.state.power_toggle();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::TurnOn => {
                let cmd = self.state.turn_on();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::TurnOff => {
                let cmd = self.state.turn_off();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::Reset => {
                let cmd = self.state.reset();
                let _ = self.network_tx.send(cmd);
            }

            // Fan actions
            UiEvent::CycleFanMode => self.state.cycle_fan_mode(),
            UiEvent::ApplyFanMode => {
                let cmd = self.state.apply_fan_mode();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::SpeedUp => self.state.speed_up(),
            UiEvent::SpeedDown => self.state.speed_down(),
            UiEvent::ApplyFanSpeed => {
                if let Some(cmd) = self.state.apply_fan_speed() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => return true,
        }
        false
    }
}
