//! Theme system providing colors, typography, and layout dimensions.
//!
//! A theme carries a light and a dark variant. Which one is active follows the
//! user's [`ThemePreference`], with `System` tracking the OS appearance.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod preference;
pub use preference::*;
