use std::fmt;

/// One of the two marks placed on the board. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get the other symbol
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Symbol that plays the move numbered `move_count` (0-based).
    pub fn for_move(move_count: usize) -> Symbol {
        if move_count % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    /// Get symbol name for display
    pub fn name(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
