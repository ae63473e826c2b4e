use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::{Game, Screen};
use crate::settings::Settings;
use crate::ui;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let settings = Settings::load();
    let mut game = Game::new(settings.difficulty);

    let result = run_loop(&mut terminal, &mut game);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        // Poll with a timeout so the timer display keeps ticking.
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(game, key)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns Ok(true) when the application should exit.
fn handle_key(game: &mut Game, key: KeyEvent) -> Result<bool, Box<dyn std::error::Error>> {
    match game.screen {
        Screen::Menu => handle_menu_key(game, key),
        Screen::Playing => handle_playing_key(game, key),
        Screen::Paused => Ok(handle_paused_key(game, key)),
        Screen::Won => handle_won_key(game, key),
        Screen::GameOver => handle_game_over_key(game, key),
    }
}

fn start_game(game: &mut Game) -> Result<(), Box<dyn std::error::Error>> {
    // Remember the chosen difficulty; a failed write is not fatal.
    let _ = Settings {
        difficulty: game.difficulty,
    }
    .save();
    game.start_new_game()?;
    Ok(())
}

fn handle_menu_key(game: &mut Game, key: KeyEvent) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Up | KeyCode::Left => game.difficulty = game.difficulty.prev(),
        KeyCode::Down | KeyCode::Right => game.difficulty = game.difficulty.next(),
        KeyCode::Enter => start_game(game)?,
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_playing_key(game: &mut Game, key: KeyEvent) -> Result<bool, Box<dyn std::error::Error>> {
    if game.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return Ok(true),
            _ => game.show_quit_confirm = false,
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Up => game.move_cursor(-1, 0),
        KeyCode::Down => game.move_cursor(1, 0),
        KeyCode::Left => game.move_cursor(0, -1),
        KeyCode::Right => game.move_cursor(0, 1),
        KeyCode::Enter => game.commit_sketch(),
        KeyCode::Delete | KeyCode::Backspace => game.erase(),
        KeyCode::Char(c) => handle_playing_char(game, c),
        KeyCode::Esc => game.show_quit_confirm = true,
        _ => {}
    }
    Ok(false)
}

fn handle_playing_char(game: &mut Game, c: char) {
    match c {
        '1'..='9' => game.input_digit(c as u8 - b'0'),
        '0' => game.erase(),
        's' | 'S' => game.toggle_sketch_mode(),
        'r' | 'R' => game.reset_board(),
        'v' | 'V' => game.validate(),
        ' ' => game.toggle_pause(),
        'q' | 'Q' => game.show_quit_confirm = true,
        _ => {}
    }
}

fn handle_paused_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Esc | KeyCode::Enter => game.toggle_pause(),
        _ => {}
    }
    false
}

fn handle_won_key(game: &mut Game, key: KeyEvent) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') => game.screen = Screen::Menu,
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_game_over_key(game: &mut Game, key: KeyEvent) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => start_game(game)?,
        KeyCode::Char('m') => game.screen = Screen::Menu,
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}
