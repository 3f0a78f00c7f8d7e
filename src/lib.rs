pub mod auto_assignor;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod selection;

pub use auto_assignor::AutoAssignor;
pub use config::Config;
pub use error::Error;
