//! Interactive terminal form
//!
//! ratatui front end over [`FormRuntime`]. Terminal events, request
//! completions and a redraw tick are multiplexed with `tokio::select!` on one
//! task, so the form is never touched concurrently.
//!
//! Keys: Tab / Shift-Tab move focus, Enter submits from any single-line
//! field or the button, Ctrl-Y copies, Ctrl-D downloads, Esc dismisses the
//! notification, PageUp / PageDown scroll the result, Ctrl-C or Ctrl-Q quits.

use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::app::client::GenerationService;
use crate::app::form::{FormRuntime, FormView, NotificationKind, Panel, ReadmeForm};
use crate::app::host::{ScrollTarget, TerminalHost};
use crate::errors::Result;

const TICK_RATE: Duration = Duration::from_millis(100);
const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const PAGE: u16 = 10;

/// Focusable form elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GitUrl,
    ProjectName,
    Description,
    Submit,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::GitUrl => Field::ProjectName,
            Field::ProjectName => Field::Description,
            Field::Description => Field::Submit,
            Field::Submit => Field::GitUrl,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::GitUrl => Field::Submit,
            Field::ProjectName => Field::GitUrl,
            Field::Description => Field::ProjectName,
            Field::Submit => Field::Description,
        }
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit,
    Copy,
    Download,
    Quit,
}

/// Terminal-only view state
#[derive(Debug)]
pub struct FormUi {
    focus: Field,
    result_scroll: u16,
    spinner_frame: usize,
}

impl Default for FormUi {
    fn default() -> Self {
        // The URL field has focus on open
        Self {
            focus: Field::GitUrl,
            result_scroll: 0,
            spinner_frame: 0,
        }
    }
}

impl FormUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Apply a key press to the UI and form input
    pub fn handle_key(&mut self, key: KeyEvent, form: &mut ReadmeForm) -> KeyAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => KeyAction::Quit,
            KeyCode::Char('y') if ctrl => KeyAction::Copy,
            KeyCode::Char('d') if ctrl => KeyAction::Download,
            KeyCode::Esc => {
                form.close_notification();
                KeyAction::None
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                KeyAction::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                KeyAction::None
            }
            KeyCode::PageDown => {
                self.result_scroll = self.result_scroll.saturating_add(PAGE);
                KeyAction::None
            }
            KeyCode::PageUp => {
                self.result_scroll = self.result_scroll.saturating_sub(PAGE);
                KeyAction::None
            }
            KeyCode::Enter if self.focus == Field::Description => {
                self.edit(form, |value| value.push('\n'));
                KeyAction::None
            }
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Backspace => {
                self.edit(form, |value| {
                    value.pop();
                });
                KeyAction::None
            }
            KeyCode::Char(c) if !ctrl => {
                self.edit(form, |value| value.push(c));
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn edit(&self, form: &mut ReadmeForm, change: impl FnOnce(&mut String)) {
        let input = form.input();
        match self.focus {
            Field::GitUrl => {
                let mut value = input.git_url.clone();
                change(&mut value);
                form.set_git_url(value);
            }
            Field::ProjectName => {
                let mut value = input.project_name.clone();
                change(&mut value);
                form.set_project_name(value);
            }
            Field::Description => {
                let mut value = input.description.clone();
                change(&mut value);
                form.set_description(value);
            }
            Field::Submit => {}
        }
    }

    /// Bring a freshly generated result into view
    pub fn scroll_to(&mut self, target: ScrollTarget) {
        match target {
            ScrollTarget::Result => self.result_scroll = 0,
        }
    }

    fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive form until the user quits
pub async fn run_form<S>(mut runtime: FormRuntime<S>, mut host: TerminalHost) -> Result<()>
where
    S: GenerationService + 'static,
{
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal()?;
            return Err(e.into());
        }
    };

    let result = event_loop(&mut terminal, &mut runtime, &mut host).await;

    // Always hand the terminal back, even when the loop failed
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Some(path) = host.last_export() {
        println!("README.md saved to {}", path.display());
    }
    result
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    std::io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

async fn event_loop<S>(
    terminal: &mut CrosstermTerminal,
    runtime: &mut FormRuntime<S>,
    host: &mut TerminalHost,
) -> Result<()>
where
    S: GenerationService + 'static,
{
    let mut ui = FormUi::new();
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_RATE);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| render(f, &ui, runtime.form()))?;
        }
        needs_redraw = false;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match ui.handle_key(key, runtime.form_mut()) {
                        KeyAction::Quit => {
                            info!("Closing interactive form");
                            break;
                        }
                        KeyAction::Submit => {
                            if let Err(e) = runtime.submit() {
                                debug!("Submit ignored: {}", e);
                            }
                        }
                        KeyAction::Copy => {
                            runtime.form_mut().copy(host);
                        }
                        KeyAction::Download => {
                            runtime.form_mut().download(host);
                        }
                        KeyAction::None => {}
                    }
                    needs_redraw = true;
                }
                Some(Ok(Event::Resize(_, _))) => needs_redraw = true,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },

            Some(completion) = runtime.next_completion() => {
                let resolution = runtime.apply(completion);
                debug!("Completion applied: {:?}", resolution);
                needs_redraw = true;
            }

            _ = tick.tick() => {
                let form = runtime.form_mut();
                let dismissed = form.tick(Instant::now());
                if form.state().is_in_flight() {
                    ui.advance_spinner();
                    needs_redraw = true;
                }
                needs_redraw |= dismissed;
            }
        }

        if runtime.form_mut().apply_view_effects(host) {
            needs_redraw = true;
        }
        if let Some(target) = host.take_scroll_request() {
            ui.scroll_to(target);
        }
    }

    Ok(())
}

/// Draw the whole form
pub fn render(f: &mut Frame, ui: &FormUi, form: &ReadmeForm) {
    let view = form.view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Repository URL
            Constraint::Length(1), // Helper / inline error
            Constraint::Length(3), // Project name
            Constraint::Length(5), // Description
            Constraint::Length(3), // Submit
            Constraint::Min(3),    // Result panel
            Constraint::Length(1), // Notification / key hints
        ])
        .split(f.size());

    let title = Paragraph::new("README Forge - Generate a README.md from a Git repository")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_input(
        f,
        chunks[1],
        "Git repository URL *",
        view.url_field.value,
        ui.focus == Field::GitUrl,
        view.url_field.error.is_some(),
    );

    let helper = match view.url_field.error {
        Some(error) => Span::styled(error, Style::default().fg(Color::Red)),
        None => Span::styled(view.url_field.helper, Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(Paragraph::new(Line::from(helper)), chunks[2]);

    render_input(
        f,
        chunks[3],
        "Project name",
        view.project_name,
        ui.focus == Field::ProjectName,
        false,
    );
    render_input(
        f,
        chunks[4],
        "Description",
        view.description,
        ui.focus == Field::Description,
        false,
    );

    render_submit(f, chunks[5], ui, &view);
    render_panel(f, chunks[6], ui, &view.panel);
    render_status_line(f, chunks[7], &view);
}

fn render_input(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, invalid: bool) {
    let border = if invalid {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let text = if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(label.to_string())
                .borders(Borders::ALL)
                .border_style(border),
        );
    f.render_widget(input, area);
}

fn render_submit(f: &mut Frame, area: Rect, ui: &FormUi, view: &FormView<'_>) {
    let mut style = if view.submit.enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if ui.focus == Field::Submit {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let label = if view.submit.busy {
        format!("{} {}", SPINNER_FRAMES[ui.spinner_frame], view.submit.label)
    } else {
        view.submit.label.to_string()
    };

    let button = Paragraph::new(label)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn render_panel(f: &mut Frame, area: Rect, ui: &FormUi, panel: &Panel<'_>) {
    let widget = match panel {
        Panel::Empty { title, hint } => Paragraph::new(vec![
            Line::from(Span::styled(
                *title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(*hint),
        ])
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title("README.md").borders(Borders::ALL)),

        Panel::InProgress { message } => Paragraph::new(format!(
            "{} {}",
            SPINNER_FRAMES[ui.spinner_frame], message
        ))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("README.md").borders(Borders::ALL)),

        Panel::Error { message } => Paragraph::new(message.to_string())
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Red))
            .block(Block::default().title("Error").borders(Borders::ALL)),

        Panel::Result { content, actions } => {
            let hints = actions
                .iter()
                .zip(["Ctrl-Y", "Ctrl-D"])
                .map(|(action, key)| format!("{}: {}", key, action.label()))
                .collect::<Vec<_>>()
                .join("  ");
            Paragraph::new(content.to_string())
                .wrap(Wrap { trim: false })
                .scroll((ui.result_scroll, 0))
                .block(
                    Block::default()
                        .title(format!("Generated README.md  ({})", hints))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green)),
                )
        }
    };
    f.render_widget(widget, area);
}

fn render_status_line(f: &mut Frame, area: Rect, view: &FormView<'_>) {
    let line = match view.notification {
        Some(notification) => {
            let color = match notification.kind {
                NotificationKind::Success => Color::Green,
                NotificationKind::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(
                    notification.message.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (Esc to close)", Style::default().fg(Color::DarkGray)),
            ])
        }
        None => Line::from(Span::styled(
            "Tab: next field  Enter: generate  Ctrl-Q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
