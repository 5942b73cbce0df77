use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, Household, Tab, TabKind};
use crate::ops::filter::apply_row_filter;
use crate::ops::magnitude::translate_pins;
use crate::ops::rows::{new_tab, reload};
use crate::util::unicode::display_width;

use super::input;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    pub household: Household,
    /// One tab per entity kind, in `TabKind::ALL` order
    pub tabs: Vec<Tab>,
    pub active: usize,
    /// Numeric cells shown as orders of magnitude
    pub mag_mode: bool,
    pub show_deleted: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub should_quit: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status: Option<String>,
    pub theme: Theme,
    pub separator: String,
    pub gap_separator: String,
    /// First displayed row on screen, per tab
    pub row_scroll: Vec<usize>,
}

impl App {
    pub fn new(household: Household, config: &Config, show_deleted: bool) -> Self {
        let mag_mode = config.ui.magnitude;
        let tabs: Vec<Tab> = TabKind::ALL
            .iter()
            .map(|&kind| {
                let mut tab = new_tab(kind, &household, show_deleted);
                apply_row_filter(&mut tab, mag_mode);
                tab
            })
            .collect();
        let active = config
            .ui
            .default_tab
            .and_then(|kind| TabKind::ALL.iter().position(|k| *k == kind))
            .unwrap_or(0);
        let row_scroll = vec![0; tabs.len()];

        App {
            household,
            tabs,
            active,
            mag_mode,
            show_deleted,
            show_help: false,
            help_scroll: 0,
            should_quit: false,
            status: None,
            theme: Theme::from_config(&config.ui),
            separator: config.ui.separator.clone(),
            gap_separator: config.ui.gap_separator.clone(),
            row_scroll,
        }
    }

    pub fn tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active]
    }

    /// Separator width used when sizing columns. Gap separators are drawn in
    /// the same space, so they are fitted to this width.
    pub fn sep_width(&self) -> usize {
        display_width(&self.separator)
    }

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    pub fn prev_tab(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }

    /// Rebuild every tab's rows from the household, keeping pins and sorts
    pub fn reload_all(&mut self) {
        for tab in &mut self.tabs {
            reload(tab, &self.household, self.show_deleted, self.mag_mode);
        }
    }

    /// Switch display mode. Pins are re-keyed for the new mode before the
    /// row filter runs again.
    pub fn set_mag_mode(&mut self, on: bool) {
        if self.mag_mode == on {
            return;
        }
        self.mag_mode = on;
        for tab in &mut self.tabs {
            translate_pins(tab, on);
            apply_row_filter(tab, on);
        }
        info!(mag_mode = on, "display mode changed");
    }
}

/// Run the TUI application
pub fn run(
    household: Household,
    config: Config,
    show_deleted: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(household, &config, show_deleted);
    info!(tab = app.tab().kind.label(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
