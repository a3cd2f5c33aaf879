pub mod config;
pub mod metric;
pub mod profile;
pub mod records;
pub mod values;

pub use metric::{Domain, Metric};
pub use profile::MedicalProfile;
