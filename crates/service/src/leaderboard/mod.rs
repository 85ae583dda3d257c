pub mod repository;
pub mod service;

pub use repository::{LeaderboardRepository, SeaOrmLeaderboardRepository};
pub use service::LeaderboardService;
