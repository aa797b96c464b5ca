//! Card identities - static card data.
//!
//! A `CardCode` is one of the 52 rank+suit pairings. It never changes and
//! is all that the deck and the save file store. Everything displayed about
//! a card (category, color, symbol, event text) is looked up from the code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Short label used in card codes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.label() == label)
    }
}

/// Card suit. Each suit is one event category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single letter used in card codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Display metadata for this suit's category.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Suit::Hearts => Category {
                name: "SYSTEMS",
                color: "#ff3333",
                symbol: '♥',
            },
            Suit::Diamonds => Category {
                name: "STRUCTURE",
                color: "#33ffff",
                symbol: '♦',
            },
            Suit::Clubs => Category {
                name: "CREW",
                color: "#33ff33",
                symbol: '♣',
            },
            Suit::Spades => Category {
                name: "CREATURE",
                color: "#ffff33",
                symbol: '♠',
            },
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|s| s.letter() == letter)
    }
}

/// Display metadata shared by every card of a suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Category name ("SYSTEMS", "STRUCTURE", ...).
    pub name: &'static str,
    /// Hex color for the front end.
    pub color: &'static str,
    /// Suit symbol.
    pub symbol: char,
}

/// One of the 52 card identities.
///
/// Serialized as its short code (`"AH"`, `"10S"`) so snapshots stay readable.
///
/// ## Example
///
/// ```
/// use wretched_engine::cards::{CardCode, Rank, Suit};
///
/// let code: CardCode = "10S".parse().unwrap();
/// assert_eq!(code, CardCode::new(Rank::Ten, Suit::Spades));
/// assert_eq!(code.label(), "10♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardCode {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardCode {
    /// Create a card code.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// All 52 identities, suit by suit, Ace to King.
    pub fn all() -> impl Iterator<Item = CardCode> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| CardCode::new(rank, suit)))
    }

    /// Rank with suit symbol, as written in the history ("A♥").
    #[must_use]
    pub fn label(self) -> String {
        format!("{}{}", self.rank.label(), self.suit.category().symbol)
    }

    #[must_use]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.letter())
    }
}

impl FromStr for CardCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCardCode(s.to_string());

        let letter = s.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_letter(letter).ok_or_else(invalid)?;
        let rank = Rank::from_label(&s[..s.len() - letter.len_utf8()]).ok_or_else(invalid)?;

        Ok(CardCode::new(rank, suit))
    }
}

impl TryFrom<String> for CardCode {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardCode> for String {
    fn from(code: CardCode) -> Self {
        code.to_string()
    }
}

/// A drawn card: identity plus everything looked up for it.
///
/// Derived from the code by `CardCatalog::resolve`, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub code: CardCode,
    pub category: Category,
    pub event: &'static str,
}

impl Card {
    /// History label ("A♥").
    #[must_use]
    pub fn label(&self) -> String {
        self.code.label()
    }
}
