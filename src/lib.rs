pub mod ceiling;
pub mod cuts;
pub mod error;
pub mod layout;
pub mod math;
pub mod placement;
pub mod walls;

pub use error::{BayformError, Result};
