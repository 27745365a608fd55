pub mod back_button;
pub mod coins_badge;
pub mod spinner;

pub use back_button::BackButton;
pub use coins_badge::CoinsBadge;
pub use spinner::WeightedSpinner;
