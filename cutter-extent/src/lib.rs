pub mod extent;
pub mod zone;

mod error;

pub use error::ExtentError;
