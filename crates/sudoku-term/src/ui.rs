use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::game::{Game, Screen};
use sudoku_engine::{Cell, Difficulty};

// ── Constants ────────────────────────────────────────────────────────────────

// 9 cell columns of width 3 plus 10 separators; 9 cell rows plus 4 band
// borders.
const GRID_WIDTH: u16 = 37;
const GRID_HEIGHT: u16 = 13;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    match game.screen {
        Screen::Menu => draw_menu(f, game),
        Screen::Playing => draw_playing(f, game),
        Screen::Paused => draw_paused(f, game),
        Screen::Won => draw_won(f, game),
        Screen::GameOver => draw_game_over(f, game),
    }

    if game.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

// ── Menu screen ──────────────────────────────────────────────────────────────

fn draw_menu(f: &mut Frame, game: &Game) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Min(0),
    ])
    .split(center_rect(48, 22, area));

    let title_lines = vec![
        Line::from(Span::styled(
            r"╔═╗╦ ╦╔╦╗╔═╗╦╔═╦ ╦",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"╚═╗║ ║ ║║║ ║╠╩╗║ ║",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"╚═╝╚═╝═╩╝╚═╝╩ ╩╚═╝",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let title = Paragraph::new(title_lines).alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let diff_color = difficulty_color(game.difficulty);
    let selector_line = Line::from(vec![
        Span::styled("◄  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {}  ", game.difficulty.label()),
            Style::default()
                .fg(diff_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ►", Style::default().fg(Color::DarkGray)),
    ]);
    let selector = Paragraph::new(vec![
        Line::from(Span::styled(
            "Select Difficulty",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        selector_line,
    ])
    .alignment(Alignment::Center);
    f.render_widget(selector, chunks[3]);

    let controls = Paragraph::new(vec![
        Line::from(Span::styled(
            "Controls",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::styled("    Change difficulty", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled("  Start game", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled("      Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[5]);
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let area = f.area();

    let outer = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

    let main_area = outer[0];
    let bottom_area = outer[1];

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH + 2),
        Constraint::Length(2),
        Constraint::Length(24),
        Constraint::Min(0),
    ])
    .split(main_area);

    let grid_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT + 2),
        Constraint::Min(0),
    ])
    .split(h_chunks[1]);

    draw_grid(f, game, grid_v[1]);

    let panel_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(10),
        Constraint::Min(0),
    ])
    .split(h_chunks[3]);

    draw_info_panel(f, game, panel_v[1]);

    draw_key_hints(f, bottom_area);
}

// ── Grid ─────────────────────────────────────────────────────────────────────

fn draw_grid(f: &mut Frame, game: &Game, area: Rect) {
    let selected = game.play.selected();
    let selected_val = game.selected_value();

    let mut lines: Vec<Line> = Vec::with_capacity(GRID_HEIGHT as usize);

    for visual_row in 0..GRID_HEIGHT {
        match visual_row {
            0 => lines.push(Line::from(horizontal_border(0))),
            4 | 8 => lines.push(Line::from(horizontal_border(1))),
            12 => lines.push(Line::from(horizontal_border(3))),
            _ => {
                // Visual rows 1-3, 5-7, 9-11 map onto grid rows 0-8.
                let band = (visual_row / 4) as usize;
                let grid_row = band * 3 + (visual_row as usize - band * 4) - 1;

                let mut spans: Vec<Span> = Vec::new();
                for grid_col in 0..9 {
                    let sep = if grid_col % 3 == 0 { thick_sep() } else { thin_sep() };
                    spans.push(sep);

                    let cell = game.play.cell(grid_row, grid_col);
                    let is_selected = selected == Some((grid_row, grid_col));
                    let is_conflict = game.show_conflicts
                        && game.conflicts.contains(&(grid_row, grid_col));
                    let is_same_number = match selected_val {
                        Some(sv) => cell.value() == Some(sv) && !is_selected,
                        None => false,
                    };

                    let bg = if is_selected {
                        Color::Yellow
                    } else if is_conflict {
                        Color::Red
                    } else if is_same_number {
                        Color::DarkGray
                    } else {
                        Color::Reset
                    };

                    spans.push(render_cell(
                        cell,
                        game.play.sketch_at(grid_row, grid_col),
                        bg,
                        is_selected,
                    ));
                }
                spans.push(thick_sep());
                lines.push(Line::from(spans));
            }
        }
    }

    let block = Block::bordered()
        .title(" Sudoku ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_cell(cell: Cell, sketch: Option<u8>, bg: Color, is_selected: bool) -> Span<'static> {
    let fg_for_bg = match bg {
        Color::Yellow => Color::Black,
        Color::Red | Color::DarkGray => Color::White,
        _ => Color::Reset,
    };

    match cell {
        Cell::Given(v) => {
            let fg = if fg_for_bg != Color::Reset {
                fg_for_bg
            } else {
                Color::White
            };
            Span::styled(
                format!(" {v} "),
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            )
        }
        Cell::Filled(v) => {
            let fg = if fg_for_bg != Color::Reset {
                fg_for_bg
            } else {
                Color::Cyan
            };
            Span::styled(format!(" {v} "), Style::default().fg(fg).bg(bg))
        }
        Cell::Empty => match sketch {
            // Sketches render dim to read as pencil, not ink.
            Some(v) => Span::styled(
                format!(" {v} "),
                Style::default()
                    .fg(if fg_for_bg != Color::Reset {
                        fg_for_bg
                    } else {
                        Color::DarkGray
                    })
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            ),
            None if is_selected => {
                Span::styled(" · ", Style::default().fg(Color::Black).bg(bg))
            }
            None => Span::styled("   ", Style::default().bg(bg)),
        },
    }
}

fn thick_sep() -> Span<'static> {
    Span::styled("║", Style::default().fg(Color::White))
}

fn thin_sep() -> Span<'static> {
    Span::styled("│", Style::default().fg(Color::DarkGray))
}

fn horizontal_border(border_idx: u8) -> Span<'static> {
    let (left, thick_cross, thin_cross, right) = match border_idx {
        0 => ('╔', '╦', '╤', '╗'),
        3 => ('╚', '╩', '╧', '╝'),
        _ => ('╠', '╬', '╪', '╣'),
    };

    let mut s = String::with_capacity(GRID_WIDTH as usize * 3);
    s.push(left);
    for box_idx in 0..3 {
        for cell_idx in 0..3 {
            s.push_str("═══");
            if cell_idx < 2 {
                s.push(thin_cross);
            }
        }
        if box_idx < 2 {
            s.push(thick_cross);
        }
    }
    s.push(right);

    Span::styled(s, Style::default().fg(Color::White))
}

// ── Info panel ───────────────────────────────────────────────────────────────

fn draw_info_panel(f: &mut Frame, game: &Game, area: Rect) {
    let block = Block::bordered()
        .title(" Info ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let sketch_indicator = if game.sketch_mode {
        Span::styled(
            " ON ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("OFF", Style::default().fg(Color::DarkGray))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Difficulty: ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.difficulty.label(),
                Style::default()
                    .fg(difficulty_color(game.difficulty))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Time:       ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.format_time(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Sketch:     ", Style::default().fg(Color::Gray)),
            sketch_indicator,
        ]),
    ];

    if game.show_conflicts {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Conflicts:  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", game.conflicts.len()),
                Style::default().fg(if game.conflicts.is_empty() {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Move  ", Style::default().fg(Color::Gray)),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::styled(" Enter digit  ", Style::default().fg(Color::Gray)),
        Span::styled("⏎", Style::default().fg(Color::Yellow)),
        Span::styled(" Commit sketch  ", Style::default().fg(Color::Gray)),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::styled(" Sketch  ", Style::default().fg(Color::Gray)),
        Span::styled("Del", Style::default().fg(Color::Yellow)),
        Span::styled(" Erase  ", Style::default().fg(Color::Gray)),
        Span::styled("v", Style::default().fg(Color::Yellow)),
        Span::styled(" Check  ", Style::default().fg(Color::Gray)),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::styled(" Reset  ", Style::default().fg(Color::Gray)),
        Span::styled("Spc", Style::default().fg(Color::Yellow)),
        Span::styled(" Pause  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ── Paused screen ────────────────────────────────────────────────────────────

fn draw_paused(f: &mut Frame, game: &Game) {
    let area = f.area();

    let bg = Paragraph::new("").style(Style::default().bg(Color::Black));
    f.render_widget(bg, area);

    let popup = center_rect(34, 9, area);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Paused ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Yellow));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "⏸  PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Time: {}", game.format_time()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Space",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to resume", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Won screen ───────────────────────────────────────────────────────────────

fn draw_won(f: &mut Frame, game: &Game) {
    let area = f.area();

    let bg = Paragraph::new("").style(Style::default().bg(Color::Black));
    f.render_widget(bg, area);

    let popup = center_rect(40, 11, area);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Victory! ")
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Green));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "YOU WIN!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Time:       ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.format_time(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Difficulty: ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.difficulty.label(),
                Style::default()
                    .fg(difficulty_color(game.difficulty))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter for menu, Q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Game-over screen ─────────────────────────────────────────────────────────

fn draw_game_over(f: &mut Frame, game: &Game) {
    let area = f.area();

    let bg = Paragraph::new("").style(Style::default().bg(Color::Black));
    f.render_widget(bg, area);

    let popup = center_rect(44, 11, area);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Game Over ")
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The board is full but has conflicts.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Time: ", Style::default().fg(Color::Gray)),
            Span::styled(game.format_time(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/R restart, M menu, Q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Quit confirmation dialog ─────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(36, 7, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Y",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("/", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Any key",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}

fn difficulty_color(d: Difficulty) -> Color {
    match d {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}
