use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::AppError;
use crate::models::deck::Deck;
use crate::models::slide::{Slide, SlideRecord};

/// Title shown in the page header and the export artifact.
pub const DECK_TITLE: &str = "The Evolution of Social Media";

const SEED_DECK: &str = include_str!("../data/seed/deck.json");

/// The single owner of all mutable presentation state. Handlers take the
/// write lock, run one pure deck operation, and swap the result in — an
/// operation that fails leaves everything exactly as it was.
pub struct AppState {
    pub deck: Deck,
    /// 0-based index of the slide being shown.
    pub current: usize,
    /// +1 or -1; only orients the slide-in animation.
    pub direction: i8,
    pub edit_mode: bool,
    /// Imported slides pending user selection; empty when no import is open.
    pub staged: Vec<Slide>,
}

pub type SharedState = RwLock<AppState>;

/// Read access to the shared state. A poisoned lock means a handler
/// panicked mid-update, which should be impossible given that every deck
/// operation swaps in a fully built value.
pub fn read_state(state: &SharedState) -> Result<RwLockReadGuard<'_, AppState>, AppError> {
    state
        .read()
        .map_err(|_| AppError::Io("Presentation state lock poisoned".to_string()))
}

pub fn write_state(state: &SharedState) -> Result<RwLockWriteGuard<'_, AppState>, AppError> {
    state
        .write()
        .map_err(|_| AppError::Io("Presentation state lock poisoned".to_string()))
}

impl AppState {
    /// Load the seed presentation. The seed file uses the same wire format
    /// as the export artifact, so charts hydrate through the symbolic-name
    /// registry like any imported slide.
    pub fn seeded() -> AppState {
        let records: Vec<SlideRecord> =
            serde_json::from_str(SEED_DECK).expect("Bad seed deck JSON");
        let slides = records.into_iter().map(SlideRecord::into_slide).collect();
        let deck = Deck::new(slides).expect("Seed deck is empty");
        log::info!("Seed deck loaded: {} slides", deck.len());
        AppState {
            deck,
            current: 0,
            direction: 1,
            edit_mode: false,
            staged: Vec::new(),
        }
    }

    pub fn advance(&mut self) {
        self.direction = 1;
        self.current = self.deck.next_index(self.current);
    }

    pub fn retreat(&mut self) {
        self.direction = -1;
        self.current = self.deck.prev_index(self.current);
    }

    /// Replace the deck and clamp the selection into range.
    pub fn replace_deck(&mut self, deck: Deck, selection: usize) {
        self.current = selection.min(deck.len() - 1);
        self.deck = deck;
    }
}
