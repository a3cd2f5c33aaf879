pub mod entry;
pub mod logging;
pub mod profile;
pub mod query;
pub mod units;
