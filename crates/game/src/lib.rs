#![warn(missing_docs)]
//! Player-side rules for elemcraft: crafting, purchases, rarity, the shop,
//! persistence and the session that ties them to a universe.

mod error;
mod gallery;
mod persist;
mod rarity;
mod session;
mod shop;
mod state;

pub use error::GameError;
pub use gallery::{drop_percent, gallery, GalleryEntry};
pub use persist::{
    generate_user_id, load_or_create_user_id, load_state, save_state, state_key, DirStore,
    KeyValueStore, MemoryStore, StoreError, SAVE_VERSION, USER_ID_KEY,
};
pub use rarity::{name_len, rarity_of, Rarity, RARE_MAX_LEN, UNCOMMON_MAX_LEN};
pub use session::{Persistence, Session};
pub use shop::{listings, price_for, Listing, DEFAULT_SHOP_SIZE, MIN_PRICE};
pub use state::{
    CraftOutcome, GameState, Progress, PurchaseReceipt, SavedState, DISCOVERY_REWARD,
    PURCHASE_BONUS,
};
