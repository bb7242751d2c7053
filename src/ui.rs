//! Layout and drawing: playfield with active-piece overlay, sidebar, game over.

use crate::app::Screen;
use crate::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use tetris_lite::{GameState, HEIGHT, WIDTH};

/// Terminal columns per board cell (two columns make a roughly square block).
const CELL_WIDTH: u16 = 2;
const SIDEBAR_WIDTH: u16 = 22;

/// Playfield size in terminal cells, border included.
fn playfield_size() -> (u16, u16) {
    (WIDTH as u16 * CELL_WIDTH + 2, HEIGHT as u16 + 2)
}

/// Draw the current screen.
pub fn draw(frame: &mut Frame, screen: Screen, state: &GameState, theme: &Theme) {
    let area = frame.area();
    draw_game(frame, state, theme, area);
    if screen == Screen::GameOver {
        draw_game_over(frame, state, theme, area);
    }
}

/// Board and sidebar, centred in `area`.
fn draw_game(frame: &mut Frame, state: &GameState, theme: &Theme, area: Rect) {
    let (pw, ph) = playfield_size();
    let total_w = pw + SIDEBAR_WIDTH;

    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(total_w),
            Constraint::Fill(1),
        ])
        .split(area);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(ph),
            Constraint::Fill(1),
        ])
        .split(horiz[1]);
    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(pw), Constraint::Length(SIDEBAR_WIDTH)])
        .split(vert[1]);

    draw_playfield(frame, state, theme, inner[0]);
    draw_sidebar(frame, state, theme, inner[1]);
}

/// Occupied board cells and the active piece share the active piece's colour; landed cells
/// keep no colour of their own.
fn draw_playfield(frame: &mut Frame, state: &GameState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line).bg(theme.bg))
        .title(Span::styled(" tetris-lite ", Style::default().fg(theme.title)));

    let fill = theme.piece_color(state.active().color());
    let filled = Style::default().fg(fill).bg(fill);
    let empty = Style::default().fg(theme.inactive_fg).bg(theme.bg);

    let lines: Vec<Line> = (0..HEIGHT as i32)
        .map(|row| {
            let spans: Vec<Span> = (0..WIDTH as i32)
                .map(|col| {
                    if state.is_filled(row, col) {
                        Span::styled("██", filled)
                    } else {
                        Span::styled(" ·", empty)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines)
        .block(block)
        .render(area, frame.buffer_mut());
}

fn draw_sidebar(frame: &mut Frame, state: &GameState, theme: &Theme, area: Rect) {
    let title_style = Style::default().fg(theme.title);
    let fg_style = Style::default().fg(theme.main_fg);
    let border_style = Style::default().fg(theme.div_line).bg(theme.bg);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score
            Constraint::Length(1), // gap
            Constraint::Length(8), // Keys
        ])
        .split(area);

    let score = Paragraph::new(Line::from(vec![
        Span::styled("Score: ", title_style),
        Span::styled(state.score().to_string(), fg_style),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(border_style));
    score.render(chunks[0], frame.buffer_mut());

    let help = [
        ("←/h", "Left"),
        ("→/l", "Right"),
        ("↓/j", "Soft drop"),
        ("↑/k", "Rotate"),
        ("Q", "Quit"),
    ];
    let lines: Vec<Line> = help
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:<5}"), title_style),
                Span::styled(*what, fg_style),
            ])
        })
        .collect();
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(" Keys ", title_style)),
        )
        .render(chunks[2], frame.buffer_mut());
}

fn draw_game_over(frame: &mut Frame, state: &GameState, theme: &Theme, area: Rect) {
    let popup_w = 28u16;
    let popup_h = 8u16;
    let popup = Rect {
        x: area.x + area.width.saturating_sub(popup_w) / 2,
        y: area.y + area.height.saturating_sub(popup_h) / 2,
        width: popup_w.min(area.width),
        height: popup_h.min(area.height),
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Game Over! ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Score: {} ", state.score()),
            Style::default().fg(theme.main_fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " R: Restart    Q: Quit ",
            Style::default().fg(theme.main_fg),
        )),
    ];
    Clear.render(popup, frame.buffer_mut());
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.div_line).bg(theme.bg)),
        )
        .render(popup, frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::{Buffer, Cell};

    fn render(screen: Screen, state: &GameState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();
        terminal
            .draw(|f| draw(f, screen, state, &Theme::default()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(Cell::symbol).collect()
    }

    #[test]
    fn test_draw_shows_score_and_piece() {
        let state = GameState::new_game(8);
        let text = buffer_text(&render(Screen::Playing, &state));
        assert!(text.contains("Score: 0"));
        assert!(text.contains('█'));
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_draw_game_over_popup() {
        let mut state = GameState::new_game(8);
        while !state.is_game_over() {
            state = state.apply_tick();
        }
        let text = buffer_text(&render(Screen::GameOver, &state));
        assert!(text.contains("Game Over!"));
        assert!(text.contains("Restart"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        let state = GameState::new_game(1);
        terminal
            .draw(|f| draw(f, Screen::GameOver, &state, &Theme::default()))
            .unwrap();
    }
}
