pub mod constants;
pub mod shared_spinner_game;
pub mod validation;
