//! A single player's session: shared universe, owned state, backing store.
//!
//! The session is the only mutable owner of [`GameState`]. Each successful
//! mutation is followed by a save; store failures switch the session to
//! in-memory mode instead of failing the operation.

use crate::error::GameError;
use crate::gallery::{gallery, GalleryEntry};
use crate::persist::{
    generate_user_id, load_or_create_user_id, load_state, save_state, state_key, KeyValueStore,
};
use crate::shop::{listings, Listing, DEFAULT_SHOP_SIZE};
use crate::state::{CraftOutcome, GameState, Progress, PurchaseReceipt};
use elemcraft_core::Universe;
use std::sync::Arc;
use tracing::{info, warn};

/// Whether the session is still writing to its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Saves reach the store.
    Active,
    /// The store failed; state lives in memory only.
    Unavailable,
}

/// Player session over a shared universe.
pub struct Session<S: KeyValueStore> {
    universe: Arc<Universe>,
    state: GameState,
    store: S,
    user_id: String,
    state_key: String,
    persistence: Persistence,
    shop_size: usize,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, loading saved state when present and valid.
    ///
    /// Never fails: missing, corrupt or foreign-seed saves start fresh, and an
    /// unreadable store yields an in-memory session.
    pub fn open(universe: Arc<Universe>, mut store: S) -> Self {
        let mut persistence = Persistence::Active;
        let user_id = match load_or_create_user_id(&mut store) {
            Ok(id) => id,
            Err(err) => {
                warn!("persistence unavailable, playing in memory: {err}");
                persistence = Persistence::Unavailable;
                generate_user_id()
            }
        };
        let key = state_key(&user_id);

        let saved = if persistence == Persistence::Active {
            match load_state(&store, &key) {
                Ok(saved) => saved,
                Err(err) => {
                    warn!("persistence unavailable, playing in memory: {err}");
                    persistence = Persistence::Unavailable;
                    None
                }
            }
        } else {
            None
        };

        let state = match saved {
            Some(saved) if saved.seed == universe.seed() => GameState::from_snapshot(saved),
            Some(saved) => {
                warn!(
                    saved_seed = saved.seed,
                    seed = universe.seed(),
                    "saved state belongs to another universe, starting fresh"
                );
                GameState::new()
            }
            None => GameState::new(),
        };

        let mut session = Self {
            universe,
            state,
            store,
            user_id,
            state_key: key,
            persistence,
            shop_size: DEFAULT_SHOP_SIZE,
        };
        session.persist();
        session
    }

    /// Override how many shop listings are offered.
    pub fn with_shop_size(mut self, shop_size: usize) -> Self {
        self.shop_size = shop_size;
        self
    }

    /// Combine two elements.
    pub fn craft(&mut self, a: &str, b: &str) -> Result<CraftOutcome, GameError> {
        let outcome = self.state.craft(&self.universe, a, b)?;
        self.persist();
        Ok(outcome)
    }

    /// Combine the first two entries of a selection.
    pub fn craft_selection<T: AsRef<str>>(
        &mut self,
        selection: &[T],
    ) -> Result<CraftOutcome, GameError> {
        let outcome = self.state.craft_selection(&self.universe, selection)?;
        self.persist();
        Ok(outcome)
    }

    /// Buy an element currently listed in the shop at its listed price.
    pub fn buy(&mut self, name: &str) -> Result<PurchaseReceipt, GameError> {
        if self.universe.element(name).is_none() {
            return Err(GameError::UnknownElement(name.to_string()));
        }
        let listing = self
            .shop()
            .into_iter()
            .find(|listing| listing.name == name)
            .ok_or_else(|| GameError::NotForSale(name.to_string()))?;
        self.purchase(name, listing.price)
    }

    /// Buy an element at an explicit price.
    pub fn purchase(&mut self, name: &str, price: u64) -> Result<PurchaseReceipt, GameError> {
        let receipt = self.state.purchase(name, price)?;
        self.persist();
        Ok(receipt)
    }

    /// Return to the initial state. Callers confirm with the user first.
    pub fn reset(&mut self) {
        self.state.reset();
        info!(user = %self.user_id, "progress reset");
        self.persist();
    }

    /// Current shop listings.
    pub fn shop(&self) -> Vec<Listing> {
        listings(&self.universe, &self.state, self.shop_size)
    }

    /// Gallery rows matching `filter`.
    pub fn gallery(&self, filter: &str) -> Vec<GalleryEntry> {
        gallery(&self.universe, &self.state, filter)
    }

    /// Discovery progress.
    pub fn progress(&self) -> Progress {
        self.state.progress(&self.universe)
    }

    /// Read-only player state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The shared universe.
    pub fn universe(&self) -> &Arc<Universe> {
        &self.universe
    }

    /// Local user identity.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Persistence status.
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        if self.persistence == Persistence::Unavailable {
            return;
        }
        let snapshot = self.state.snapshot(self.universe.seed());
        if let Err(err) = save_state(&mut self.store, &self.state_key, &snapshot) {
            warn!("persistence unavailable, playing in memory: {err}");
            self.persistence = Persistence::Unavailable;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{MemoryStore, StoreError};
    use elemcraft_core::UniverseConfig;

    fn universe() -> Arc<Universe> {
        Arc::new(Universe::generate(&UniverseConfig {
            generated_total: 25,
            recipe_target: 30,
            ..UniverseConfig::default()
        }))
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn opening_writes_initial_state() {
        let session = Session::open(universe(), MemoryStore::new());
        let key = state_key(session.user_id());
        assert!(session.store().get(&key).unwrap().is_some());
        assert_eq!(session.persistence(), Persistence::Active);
    }

    #[test]
    fn crafts_survive_reopen() {
        let universe = universe();
        let mut session = Session::open(universe.clone(), MemoryStore::new());
        session.craft("Fire", "Water").unwrap();
        let store = session.store().clone();

        let reopened = Session::open(universe, store);
        assert!(reopened.state().is_discovered("Steam"));
        assert_eq!(reopened.state().coins(), 10);
        assert_eq!(reopened.user_id(), session.user_id());
    }

    #[test]
    fn broken_store_degrades_to_memory() {
        let mut session = Session::open(universe(), BrokenStore);
        assert_eq!(session.persistence(), Persistence::Unavailable);
        assert_eq!(session.craft("Air", "Air").unwrap().name(), "Breeze");
        assert_eq!(session.state().coins(), 10);
    }

    #[test]
    fn foreign_seed_save_starts_fresh() {
        let mut store = MemoryStore::new();
        let user = load_or_create_user_id(&mut store).unwrap();
        let other = GameState::from_snapshot(crate::state::SavedState {
            discovered: vec!["Steam".into()],
            inventory: vec![],
            coins: 99,
            seed: 1,
        });
        save_state(&mut store, &state_key(&user), &other.snapshot(1)).unwrap();

        let session = Session::open(universe(), store);
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn edited_save_with_max_coins_keeps_playing() {
        let universe = universe();
        let mut store = MemoryStore::new();
        let user = load_or_create_user_id(&mut store).unwrap();
        let saved = crate::state::SavedState {
            discovered: vec![],
            inventory: vec![],
            coins: u64::MAX,
            seed: universe.seed(),
        };
        save_state(&mut store, &state_key(&user), &saved).unwrap();

        let mut session = Session::open(universe, store);
        assert_eq!(session.state().coins(), u64::MAX);
        assert_eq!(session.craft("Fire", "Fire").unwrap().name(), "Ember");
        assert_eq!(session.state().coins(), u64::MAX);
        assert_eq!(session.persistence(), Persistence::Active);
    }

    #[test]
    fn buy_requires_listing() {
        let mut session = Session::open(universe(), MemoryStore::new());
        assert_eq!(
            session.buy("Nope"),
            Err(GameError::UnknownElement("Nope".into()))
        );
        assert_eq!(
            session.buy("Fire"),
            Err(GameError::NotForSale("Fire".into()))
        );

        let first = session.shop()[0].clone();
        assert!(matches!(
            session.buy(&first.name),
            Err(GameError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn buy_at_listed_price() {
        let mut session = Session::open(universe(), MemoryStore::new());
        // Earn coins by discovering every curated result.
        for (a, b) in [
            ("Water", "Water"),
            ("Fire", "Water"),
            ("Fire", "Fire"),
            ("Earth", "Water"),
            ("Air", "Air"),
            ("Earth", "Earth"),
            ("Air", "Water"),
            ("Air", "Fire"),
            ("Earth", "Fire"),
        ] {
            session.craft(a, b).unwrap();
        }
        let coins = session.state().coins();
        let cheapest = session
            .shop()
            .into_iter()
            .filter(|l| l.affordable)
            .min_by_key(|l| l.price)
            .unwrap();

        let receipt = session.buy(&cheapest.name).unwrap();
        assert_eq!(receipt.price, cheapest.price);
        assert_eq!(session.state().coins(), coins - cheapest.price + 10);
        assert!(session.shop().iter().all(|l| l.name != cheapest.name));
    }

    #[test]
    fn reset_is_persisted() {
        let universe = universe();
        let mut session = Session::open(universe.clone(), MemoryStore::new());
        session.craft("Earth", "Earth").unwrap();
        session.reset();

        let reopened = Session::open(universe, session.store().clone());
        assert_eq!(reopened.state(), &GameState::new());
    }
}
