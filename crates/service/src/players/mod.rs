pub mod repository;
pub mod service;

pub use repository::{PlayersRepository, SeaOrmPlayersRepository};
pub use service::PlayersService;
