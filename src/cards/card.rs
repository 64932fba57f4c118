//! Defines the core components of an Uno playing card.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The color of a card. `Wild` is not a real table color: it marks a card
/// whose color has not been chosen yet. Once a wild card is played its color
/// is reassigned to one of the four concrete colors and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// The four colors a wild card may be recolored to.
    pub const CONCRETE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn is_concrete(self) -> bool {
        self != Color::Wild
    }
}

// Explicit values let number ranks double as their scoring face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Skip = 10,
    Reverse = 11,
    DrawTwo = 12,
    Wild = 13,
    WildDrawFour = 14,
}

impl Rank {
    /// Every rank that exists in the four concrete colors.
    pub const COLORED: [Rank; 13] = [
        Rank::Zero,
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Skip,
        Rank::Reverse,
        Rank::DrawTwo,
    ];

    pub fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// The face value of a number rank, `None` for action and wild ranks.
    pub fn digit(self) -> Option<u8> {
        if (self as u8) <= 9 {
            Some(self as u8)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub color: Color,
}

impl Card {
    pub fn new(rank: Rank, color: Color) -> Self {
        Card { rank, color }
    }

    /// A wild-ranked card, still colorless.
    pub fn wild(rank: Rank) -> Self {
        Card {
            rank,
            color: Color::Wild,
        }
    }

    pub fn is_wild(self) -> bool {
        self.rank.is_wild()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Zero => "0",
            Rank::One => "1",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Skip => "Skip",
            Rank::Reverse => "Reverse",
            Rank::DrawTwo => "Draw Two",
            Rank::Wild => "Wild",
            Rank::WildDrawFour => "Wild Draw Four",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.color == Color::Wild {
            write!(f, "{}", self.rank)
        } else {
            write!(f, "{} {}", self.rank, self.color)
        }
    }
}

/// Why a rank, color, or card string could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("unrecognized color `{0}`")]
    Color(String),
    #[error("unrecognized rank `{0}`")]
    Rank(String),
    #[error("a colored card needs both a rank and a color")]
    MissingColor,
}

impl FromStr for Color {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Color::Red),
            "blue" | "b" => Ok(Color::Blue),
            "green" | "g" => Ok(Color::Green),
            "yellow" | "y" => Ok(Color::Yellow),
            "wild" => Ok(Color::Wild),
            other => Err(ParseCardError::Color(other.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "zero" => Ok(Rank::Zero),
            "1" | "one" => Ok(Rank::One),
            "2" | "two" => Ok(Rank::Two),
            "3" | "three" => Ok(Rank::Three),
            "4" | "four" => Ok(Rank::Four),
            "5" | "five" => Ok(Rank::Five),
            "6" | "six" => Ok(Rank::Six),
            "7" | "seven" => Ok(Rank::Seven),
            "8" | "eight" => Ok(Rank::Eight),
            "9" | "nine" => Ok(Rank::Nine),
            "skip" => Ok(Rank::Skip),
            "reverse" => Ok(Rank::Reverse),
            "draw two" | "drawtwo" | "draw2" | "+2" => Ok(Rank::DrawTwo),
            "wild" => Ok(Rank::Wild),
            "wild draw four" | "wilddrawfour" | "wild4" | "+4" => Ok(Rank::WildDrawFour),
            other => Err(ParseCardError::Rank(other.to_string())),
        }
    }
}

/// Accepts the shapes a chat caller produces after splitting a `play`
/// command: `"7 red"`, `"red 7"`, `"draw two blue"`, or a bare wild rank
/// like `"wild draw four"`. Parsing is case-insensitive.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // A bare wild rank needs no color word.
        if let Ok(rank) = s.parse::<Rank>() {
            if rank.is_wild() {
                return Ok(Card::wild(rank));
            }
            return Err(ParseCardError::MissingColor);
        }

        // Try a trailing color token first ("draw two red"), then a
        // leading one ("red draw two").
        if let Some((head, tail)) = s.rsplit_once(char::is_whitespace) {
            if let (Ok(rank), Ok(color)) = (head.parse::<Rank>(), tail.parse::<Color>()) {
                if color.is_concrete() && !rank.is_wild() {
                    return Ok(Card::new(rank, color));
                }
            }
        }
        if let Some((head, tail)) = s.split_once(char::is_whitespace) {
            if let (Ok(color), Ok(rank)) = (head.parse::<Color>(), tail.parse::<Rank>()) {
                if color.is_concrete() && !rank.is_wild() {
                    return Ok(Card::new(rank, color));
                }
            }
        }
        Err(ParseCardError::Rank(s.to_string()))
    }
}
