#[forbid(unsafe_code)]
pub mod aircraft;
mod emissions;
pub mod quantity;
mod report;

pub use aircraft::{fleet, Aircraft};
pub use emissions::*;
pub use report::*;
