use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

/// Translates key presses into game commands
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map one key event to at most one command
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        let command = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Command::Move(Direction::Up),
            KeyCode::Down => Command::Move(Direction::Down),
            KeyCode::Left => Command::Move(Direction::Left),
            KeyCode::Right => Command::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Command::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Command::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Command::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Command::Move(Direction::Right),

            // Pace
            KeyCode::Char('=') | KeyCode::Char('+') => Command::IncreaseSpeed,
            KeyCode::Char('-') | KeyCode::Char('_') => Command::DecreaseSpeed,

            KeyCode::Char('m') | KeyCode::Char('M') => Command::ForceFood,

            // Controls; y/n answer the continue prompt
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('y') | KeyCode::Char('Y') => {
                Command::Restart
            }
            KeyCode::Char('p')
            | KeyCode::Char('P')
            | KeyCode::Char('q')
            | KeyCode::Char('Q')
            | KeyCode::Char('n')
            | KeyCode::Char('N')
            | KeyCode::Esc => Command::Quit,

            _ => return None,
        };

        Some(command)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
