//! Robomon - Actor-based robot monitoring dashboard
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP polling and command dispatch

mod app;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::env;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::{mpsc, watch};

use app::state::{CommandOutcome, AppState};
use app::AppActor;
use constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use messages::ui_events::{key_to_ui_event, Panel};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use network::poller::{run_logs_poller, run_state_poller};
use network::{NetworkActor, RobotClient};
use ui::{log_lines, state_lines, status_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file (stdout belongs to the TUI)
    let file_appender = tracing_appender::rolling::never(".", "robomon.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));
    tracing::info!(%base_url, "Starting robomon");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let client = RobotClient::new(base_url.clone());

    // Spawn network actor and pollers
    let network_actor = NetworkActor::new(client.clone(), net_resp_tx.clone());
    tokio::spawn(network_actor.run(net_cmd_rx));
    tokio::spawn(run_state_poller(
        client.clone(),
        net_resp_tx.clone(),
        shutdown_rx.clone(),
    ));
    tokio::spawn(run_logs_poller(client, net_resp_tx, shutdown_rx));

    // Spawn app actor
    let app_actor = AppActor::new(AppState::new(base_url), net_cmd_tx, render_tx, shutdown_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.active_panel, current_state.show_help)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);

    // Content: state + controls on the left, logs on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(8)])
        .split(columns[0]);

    draw_state_panel(f, state, left[0]);
    draw_controls_panel(f, state, left[1]);
    draw_logs_panel(f, state, columns[1]);

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Robomon ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(" "),
        Span::styled(state.base_url.as_str(), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn panel_border(state: &RenderState, panel: Panel) -> Style {
    if state.active_panel == panel {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_state_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(state, Panel::State))
        .title(" Robot State ");

    let mut lines: Vec<Line> = Vec::new();
    for text in state_lines(&state.state) {
        let style = if state.state.error.as_deref() == Some(text.as_str()) {
            Style::default().fg(Color::Red)
        } else if let Some(status) = text.strip_prefix("Status: ") {
            Style::default().fg(status_color(status))
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn draw_controls_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(state, Panel::Controls))
        .title(" Controls ");

    let mut lines: Vec<Line> = Vec::new();

    let power = if state.powered {
        Span::styled("ON", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("OFF", Style::default().fg(Color::Red).bold())
    };
    lines.push(Line::from(vec![Span::raw("Power: "), power]));

    lines.push(Line::from(format!("Fan mode: {}", state.fan_mode.as_str())));

    let speed_line = if state.speed_control_enabled {
        let filled = (state.fan_speed as usize) / 10;
        Line::from(format!(
            "Fan speed: [{}{}] {:3}%",
            "#".repeat(filled),
            "-".repeat(10 - filled),
            state.fan_speed
        ))
    } else {
        Line::from(Span::styled(
            "Fan speed: (set fan mode to static to enable)",
            Style::default().fg(Color::DarkGray),
        ))
    };
    lines.push(speed_line);

    if let Some(error) = &state.dispatch_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));

    // Most recent commands last; show as many as fit
    let visible = area.height.saturating_sub(2) as usize;
    let skip = state.command_log.len().saturating_sub(visible.saturating_sub(lines.len()));
    for entry in state.command_log.iter().skip(skip) {
        let (prefix, style) = match entry.outcome {
            CommandOutcome::Sent => (">> ", Style::default().fg(Color::Cyan)),
            CommandOutcome::Accepted => ("ok ", Style::default().fg(Color::Green)),
            CommandOutcome::Failed => ("!! ", Style::default().fg(Color::Red)),
        };
        let when = entry.timestamp.format("%H:%M:%S");
        lines.push(Line::from(Span::styled(
            format!("{} {}{}", when, prefix, entry.content),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_logs_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border(state, Panel::Logs))
        .title(" Robot Logs (↑/↓ scroll) ");

    let mut lines: Vec<Line> = Vec::new();
    for text in log_lines(&state.logs) {
        let style = if state.logs.error.as_deref() == Some(text.as_str()) {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.logs_scroll, 0));
    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.show_help {
        " Press any key to close help "
    } else {
        " Tab:panel | p:power o:on x:off r:reset | m/f:fan mode | ←/→ s:speed | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 ROBOMON - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   ↑ / ↓              Scroll logs (Logs panel)

 POWER
   p                  Toggle power (optimistic)
   o                  Turn on
   x                  Turn off
   r                  Reset

 FAN
   m                  Cycle fan mode selection
   f                  Apply selected fan mode
   ← / → or - / +     Adjust fan speed (static mode only)
   s                  Apply selected fan speed

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
