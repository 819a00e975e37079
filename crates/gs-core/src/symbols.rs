//! Symbol definitions and highlight tints

use serde::{Deserialize, Serialize};

/// Number of distinct symbols
pub const SYMBOL_COUNT: usize = 7;

/// RGB tint applied to a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tint(pub u32);

impl Tint {
    /// No tint (white)
    pub const NEUTRAL: Tint = Tint(0xFF_FF_FF);

    /// Hex string, e.g. `#ff0000`
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// One of the seven gems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Symbol {
    Blue = 0,
    Aqua = 1,
    Purple = 2,
    Green = 3,
    Red = 4,
    Pink = 5,
    Yellow = 6,
}

impl Symbol {
    /// All symbols in index order
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::Blue,
        Symbol::Aqua,
        Symbol::Purple,
        Symbol::Green,
        Symbol::Red,
        Symbol::Pink,
        Symbol::Yellow,
    ];

    /// Symbol for an index, `None` if out of range
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable index (0..SYMBOL_COUNT)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Blue => "blue",
            Symbol::Aqua => "aqua",
            Symbol::Purple => "purple",
            Symbol::Green => "green",
            Symbol::Red => "red",
            Symbol::Pink => "pink",
            Symbol::Yellow => "yellow",
        }
    }

    /// Highlight tint used when this symbol is part of a win
    pub fn tint(self) -> Tint {
        match self {
            Symbol::Blue => Tint(0x00_00_FF),
            Symbol::Aqua => Tint(0x00_FF_FF),
            Symbol::Purple => Tint(0x80_00_80),
            Symbol::Green => Tint(0x00_FF_00),
            Symbol::Red => Tint(0xFF_00_00),
            Symbol::Pink => Tint(0xFF_C0_CB),
            Symbol::Yellow => Tint(0xFF_FF_00),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
