use thiserror::Error;

/// Recoverable gameplay errors. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Purchase price exceeds the coin balance.
    #[error("insufficient coins: need {needed}, have {available}")]
    InsufficientFunds {
        /// Price of the item.
        needed: u64,
        /// Current balance.
        available: u64,
    },
    /// No recipe exists for the pair.
    #[error("nothing happened combining {a} and {b}")]
    NoRecipe {
        /// First input.
        a: String,
        /// Second input.
        b: String,
    },
    /// Fewer than two craft inputs were selected.
    #[error("select two items to combine (got {selected})")]
    InsufficientSelection {
        /// Number of selected items.
        selected: usize,
    },
    /// The name is not an element of this universe.
    #[error("unknown element {0}")]
    UnknownElement(String),
    /// The element is not currently offered by the shop.
    #[error("{0} is not for sale")]
    NotForSale(String),
}
