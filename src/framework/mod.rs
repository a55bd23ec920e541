pub mod config;
pub use self::config::Config;

pub mod data;
pub use data::AppData;

pub mod logging;
