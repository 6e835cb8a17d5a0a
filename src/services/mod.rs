pub mod error_handling;
pub mod history;
pub mod navigation;

pub use error_handling::{NavigationError, RouterError};
pub use history::{History, MemoryHistory};
pub use navigation::{Location, NavigationState, Navigator};
