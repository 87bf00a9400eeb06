mod store;

pub use store::{STORE_VERSION, StreakStore};
