pub mod game;
pub mod home;
pub mod lobby;
pub mod not_found;
