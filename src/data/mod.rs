pub mod loader;
pub mod model;
pub mod store;

pub use loader::DataError;
pub use model::{RfmProfile, Tables, Transaction};
pub use store::LoadedTables;
