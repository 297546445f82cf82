// openchannel-common/src/lib.rs
pub mod config;
pub mod error;
pub mod model;

// Re-export key types
pub use config::Config;
pub use error::{OcError, Result};
pub use model::{
    App, CustomData, Developer, DeveloperGroup, Field, File, Id, Model, Ownership, Record, Statistics,
    Stats, Status, User, UserGroup,
};
