pub(crate) mod config;
pub use config::{AppConfig, CatalogueConfig, ConfigError, GeneralConfig};

pub(crate) mod field;
pub use field::{Field, FieldError};

pub(crate) mod filter;
pub use filter::Filter;

pub(crate) mod treasure;
pub use treasure::Treasure;
