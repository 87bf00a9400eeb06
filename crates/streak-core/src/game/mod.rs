mod catalog;
mod types;

pub use catalog::GameCatalog;
pub use types::Game;
