mod models;
mod store;

pub use models::FileRecord;
pub use store::Registry;
