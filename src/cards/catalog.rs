//! Card catalog for event lookup.
//!
//! The `CardCatalog` maps every card identity to its scripted event text
//! and resolves drawn codes into displayable [`Card`]s.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardCode, Rank, Suit};

/// Marker that makes an event text demand a Tower Check.
pub const TOWER_CHECK_MARKER: &str = "TOWER CHECK";

/// Text used when a code has no registered event.
pub const UNKNOWN_EVENT: &str = "Unknown event.";

/// Check whether an event text mandates a Tower Check.
///
/// Case-insensitive search for the marker anywhere in the text.
#[must_use]
pub fn requires_tower_check(event: &str) -> bool {
    event.to_uppercase().contains(TOWER_CHECK_MARKER)
}

const HEARTS: [&str; 13] = [
    "YOU GOT THE DISTRESS BEACON WORKING. The system reboots. (Place 10 tokens. One is removed after every card. At the start of each day roll 1d6, on a 6 you win the game.)",
    "The water system works, but it tastes of industrial chemicals.",
    "The fire suppressors went off on their own. What caused the fault? TOWER CHECK.",
    "A ghost transmission on the radio. Was that a human voice?",
    "Life support failure. You were out of air for minutes. TOWER CHECK.",
    "Radar shows a large object approaching. Then it vanishes.",
    "You had to crawl through the ventilation ducts. TOWER CHECK.",
    "You watch the monitors for hours. Only static.",
    "Motion alarms. You had to go out and reset them by hand. TOWER CHECK.",
    "The generator makes a rhythmic noise, almost like a heartbeat.",
    "You spend the day recalibrating engines without success. TOWER CHECK.",
    "A door slammed shut and trapped you for hours. TOWER CHECK.",
    "INTRUSION! The Creature is in the ducts. (KINGS: +1)",
];

const DIAMONDS: [&str; 13] = [
    "ANTENNA REPAIRED. The beacon signal is stronger. (Tokens are removed two at a time and you win on a 5 or 6.)",
    "Micrometeorites struck the hull. Minor leaks sealed. TOWER CHECK.",
    "You reinforced the bridge windows. You fear something will get in. TOWER CHECK.",
    "The ship groans under stress. You spend the day welding cracks. TOWER CHECK.",
    "The Creature damaged a module. You had to seal it for good. TOWER CHECK.",
    "Fire in the cargo bay. You had to vent the oxygen. TOWER CHECK.",
    "The escape pod is destroyed. There is no easy way out. TOWER CHECK.",
    "Artificial gravity failure. Everything floats, debris included. TOWER CHECK.",
    "The waste system overflowed. The smell is unbearable. TOWER CHECK.",
    "The food is moldy. You had to throw half of it away. TOWER CHECK.",
    "Total blackout. Manual core restart required. TOWER CHECK.",
    "You tried to fix the engine and made it worse. TOWER CHECK.",
    "INTRUSION! The Creature scratches at the door of your shelter. (KINGS: +1)",
];

const CLUBS: [&str; 13] = [
    "You find a useful tool or an improvised weapon. (You may ignore the next Tower Check.)",
    "You read a dead crewmate's diary. What did they miss?",
    "You use a dead officer's access card. Why?",
    "You remember someone you loved among the crew.",
    "Where did you hide when the massacre began?",
    "Who died so that you could live?",
    "You find a weapon, but it only has one charge. Will you use it?",
    "You take inventory of the safe places on the ship.",
    "A crewmate predicted this. Nobody believed them.",
    "You find a personal belonging of a child who was on board.",
    "You must move the bodies out of the airlock. They are too heavy. TOWER CHECK.",
    "You scrub dried blood to make room to sleep. TOWER CHECK.",
    "INTRUSION! You see the Creature feeding on the corpses. (KINGS: +1)",
];

const SPADES: [&str; 13] = [
    "You manage to distract the Creature for a moment. (If the King of Spades has come out, shuffle it back into the deck.)",
    "Fear paralyzes you. You get nothing done today. TOWER CHECK.",
    "You see it crawling along the outside of the ship through the glass. TOWER CHECK.",
    "It whispers your name over the intercom. TOWER CHECK.",
    "Tracks of blood and oil outside your door. TOWER CHECK.",
    "You can't see it, but you smell it. Ozone and rotting flesh. TOWER CHECK.",
    "The lights flicker in code when it gets close. TOWER CHECK.",
    "You feel its mind brushing against yours. A splitting headache. TOWER CHECK.",
    "You catch yourself drawing its shape on the walls. TOWER CHECK.",
    "You find skin the thing has shed. It is translucent and hard. TOWER CHECK.",
    "Does it want to kill you or is it playing with you? TOWER CHECK.",
    "What do you think it calls itself? TOWER CHECK.",
    "INTRUSION! Nightmares made real. It is here. (KINGS: +1)",
];

/// Read-only lookup from card identity to event text.
///
/// ## Example
///
/// ```
/// use wretched_engine::cards::{CardCatalog, CardCode, Rank, Suit};
///
/// let catalog = CardCatalog::standard();
/// let card = catalog.resolve(CardCode::new(Rank::Three, Suit::Hearts));
///
/// assert_eq!(card.category.name, "SYSTEMS");
/// assert!(catalog.requires_tower_check(card.code));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    events: FxHashMap<CardCode, &'static str>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full 52-card event table.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        for (suit, table) in [
            (Suit::Hearts, &HEARTS),
            (Suit::Diamonds, &DIAMONDS),
            (Suit::Clubs, &CLUBS),
            (Suit::Spades, &SPADES),
        ] {
            for (rank, event) in Rank::ALL.into_iter().zip(table.iter().copied()) {
                catalog.register(CardCode::new(rank, suit), event);
            }
        }

        catalog
    }

    /// Register the event text for a card.
    ///
    /// Panics if the card already has an event.
    pub fn register(&mut self, code: CardCode, event: &'static str) {
        if self.events.contains_key(&code) {
            panic!("Card {code} already registered");
        }
        self.events.insert(code, event);
    }

    /// Event text for a card, if registered.
    #[must_use]
    pub fn event(&self, code: CardCode) -> Option<&'static str> {
        self.events.get(&code).copied()
    }

    /// Resolve a drawn identity into a full card.
    ///
    /// Unregistered codes get [`UNKNOWN_EVENT`].
    #[must_use]
    pub fn resolve(&self, code: CardCode) -> Card {
        Card {
            code,
            category: code.suit.category(),
            event: self.event(code).unwrap_or(UNKNOWN_EVENT),
        }
    }

    /// Whether drawing this card triggers a Tower Check.
    #[must_use]
    pub fn requires_tower_check(&self, code: CardCode) -> bool {
        requires_tower_check(self.resolve(code).event)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
