//! Digit card model, hands, and the dealer.

pub mod card;
pub mod dealer;
pub mod hand;

pub use card::{CardId, CardLocation, DigitCard};
pub use dealer::{deal_hand, CardIdAllocator};
pub use hand::{Hand, MAX_HAND_SIZE};
