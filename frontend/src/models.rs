use serde::{Deserialize, Serialize};
use shared::shared_spinner_game::Entrant;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TelegramUser {
    pub id: u64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl TelegramUser {
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(username) => format!("@{}", username),
            None if !self.first_name.is_empty() => self.first_name.clone(),
            None => "Guest".to_string(),
        }
    }

    /// Stand-in identity for development outside the Telegram client.
    pub fn mock() -> Self {
        Self {
            id: 123456789,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LobbyPlayer {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub is_ready: bool,
    pub color: String,
}

// Mock lobby players (will be replaced by backend / realtime later)
pub fn initial_lobby_players() -> Vec<LobbyPlayer> {
    vec![
        LobbyPlayer {
            id: 1,
            username: "captain".to_string(),
            display_name: "Captain".to_string(),
            is_ready: true,
            color: "pink".to_string(),
        },
        LobbyPlayer {
            id: 2,
            username: "sailor".to_string(),
            display_name: "Sailor".to_string(),
            is_ready: false,
            color: "blue".to_string(),
        },
        LobbyPlayer {
            id: 3,
            username: "gunner".to_string(),
            display_name: "Gunner".to_string(),
            is_ready: false,
            color: "violet".to_string(),
        },
    ]
}

// Temporary mock data; replace with backend fetch later
pub fn mock_spinner_players() -> Vec<Entrant> {
    vec![
        Entrant { id: 1, name: "Player 1".to_string(), color: "blue".to_string(), weight: 40.0 },
        Entrant { id: 2, name: "Player 2".to_string(), color: "red".to_string(), weight: 15.0 },
        Entrant { id: 3, name: "Player 3".to_string(), color: "green".to_string(), weight: 1.0 },
        Entrant { id: 4, name: "Player 4".to_string(), color: "yellow".to_string(), weight: 10.0 },
        Entrant { id: 5, name: "Player 5".to_string(), color: "purple".to_string(), weight: 30.0 },
    ]
}
