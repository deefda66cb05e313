use piston::input::Key;

/// Everything the keyboard can ask of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Spawn,
    ToggleWalls,
    LoadScene(u8),
    Clear,
    TogglePause,
    Step,
    Quit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Command> {
        let command = match key {
            Key::Space => Command::Spawn,
            Key::Q => Command::ToggleWalls,
            Key::D1 => Command::LoadScene(1),
            Key::D2 => Command::LoadScene(2),
            Key::D3 => Command::LoadScene(3),
            Key::C => Command::Clear,
            Key::P => Command::TogglePause,
            Key::N => Command::Step,
            Key::Escape => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_table() {
        let table = [
            (Key::Space, Command::Spawn),
            (Key::Q, Command::ToggleWalls),
            (Key::D1, Command::LoadScene(1)),
            (Key::D2, Command::LoadScene(2)),
            (Key::D3, Command::LoadScene(3)),
            (Key::C, Command::Clear),
            (Key::P, Command::TogglePause),
            (Key::N, Command::Step),
            (Key::Escape, Command::Quit),
        ];
        for (key, command) in table.iter() {
            assert_eq!(Command::from_key(*key), Some(*command), "{:?}", key);
        }
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(Command::from_key(Key::D4), None);
        assert_eq!(Command::from_key(Key::A), None);
        assert_eq!(Command::from_key(Key::Return), None);
    }
}
