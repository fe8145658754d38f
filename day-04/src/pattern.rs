use crate::error::PatternError;

/// A three character reading of one diagonal
pub type Word = [char; 3];

pub const MAS: Word = ['M', 'A', 'S'];
pub const SAM: Word = ['S', 'A', 'M'];

/// Diagonal directions through a center cell
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    NWtoSE, // ↘
    NEtoSW, // ↙
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::NWtoSE, Direction::NEtoSW];

    /// Row/column step from the first cell of the diagonal towards the last
    pub(crate) fn step(self) -> (isize, isize) {
        match self {
            Direction::NWtoSE => (1, 1),
            Direction::NEtoSW => (1, -1),
        }
    }
}

/// Three characters sampled along a diagonal, in reading order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Diagonal(pub Word);

impl Diagonal {
    #[must_use]
    pub fn reversed(self) -> Self {
        let [a, b, c] = self.0;
        Self([c, b, a])
    }
}

impl From<Word> for Diagonal {
    fn from(word: Word) -> Self {
        Self(word)
    }
}

/// The pair of accepted diagonal words and their shared pivot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: [Word; 2],
    pivot: char,
}

impl WordSet {
    pub fn new(words: [Word; 2]) -> Result<Self, PatternError> {
        let (first, second) = (words[0][1], words[1][1]);
        if first != second {
            return Err(PatternError::PivotMismatch { first, second });
        }
        Ok(Self {
            words,
            pivot: first,
        })
    }

    pub fn pivot(&self) -> char {
        self.pivot
    }

    /// True if the diagonal reads as any accepted word, forwards or backwards
    pub fn accepts(&self, diagonal: Diagonal) -> bool {
        let reversed = diagonal.reversed();
        self.words
            .iter()
            .any(|word| diagonal.0 == *word || reversed.0 == *word)
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self {
            words: [MAS, SAM],
            pivot: 'A',
        }
    }
}
