mod portfolio;
pub use portfolio::*;
