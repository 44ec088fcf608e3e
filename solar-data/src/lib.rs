mod loader;

pub use loader::{LocationLoader, LocationLoaderError, LocationRecord};
