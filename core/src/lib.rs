pub mod controller;
pub mod error;
pub mod store;
pub mod types;

pub use controller::{Action, Controller, EntryDraft, Surface};
pub use error::{StoreError, ValidationError};
pub use store::DataStore;
pub use types::{AppConfig, Field, Filter, Treasure};
