//! App: terminal init, main loop, tick scheduling and key handling.

use crate::GameConfig;
use crate::input::{Action, key_to_action};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tetris_lite::{ActivePiece, Command, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    GameOver,
}

pub struct App {
    config: GameConfig,
    theme: Theme,
    state: GameState,
    screen: Screen,
    /// Deadline base for the next gravity tick; re-armed whenever the piece or board changes.
    last_tick: Instant,
}

impl App {
    pub fn new(config: GameConfig, theme: Theme) -> Self {
        let state = match config.seed {
            Some(seed) => GameState::new_game(seed),
            None => GameState::new_game_from_entropy(),
        };
        Self {
            config,
            theme,
            state,
            screen: Screen::Playing,
            last_tick: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        use crossterm::{
            execute,
            terminal::{
                EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
            },
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let mut terminal =
            ratatui::DefaultTerminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;

        self.last_tick = Instant::now();
        let result = self.run_loop(&mut terminal);

        // Restore
        execute!(std::io::stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|f| crate::ui::draw(f, self.screen, &self.state, &self.theme))?;

            // Game over freezes gravity; just wait for a key.
            let timeout = match self.screen {
                Screen::Playing => self
                    .config
                    .tick_interval
                    .saturating_sub(self.last_tick.elapsed()),
                Screen::GameOver => self.config.tick_interval,
            };

            if event::poll(timeout)? {
                while event::poll(Duration::ZERO)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if !self.handle_action(key_to_action(key)) {
                            return Ok(());
                        }
                    }
                }
            }

            if self.screen == Screen::Playing
                && self.last_tick.elapsed() >= self.config.tick_interval
            {
                self.tick();
            }
        }
    }

    /// Returns false when the app should exit.
    fn handle_action(&mut self, action: Action) -> bool {
        match (self.screen, action) {
            (_, Action::Quit) => return false,
            (Screen::Playing, Action::Move(command)) => self.apply_command(command),
            (Screen::GameOver, Action::Restart) => self.restart(),
            _ => {}
        }
        true
    }

    fn apply_command(&mut self, command: Command) {
        let before = *self.state.active();
        self.state = self.state.clone().apply_input(command);
        self.rearm_if_moved(before);
    }

    fn tick(&mut self) {
        self.state = self.state.clone().apply_tick();
        self.last_tick = Instant::now();
        if self.state.is_game_over() {
            self.screen = Screen::GameOver;
        }
    }

    fn restart(&mut self) {
        self.state = self.state.clone().restart();
        self.screen = Screen::Playing;
        self.last_tick = Instant::now();
    }

    /// A move or rotation starts a fresh gravity interval, so the next tick always runs
    /// against the piece as it is now.
    fn rearm_if_moved(&mut self, before: ActivePiece) {
        if *self.state.active() != before {
            self.last_tick = Instant::now();
        }
    }
}
