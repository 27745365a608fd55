pub mod use_coins;
pub mod use_telegram;

pub use use_coins::*;
pub use use_telegram::*;
