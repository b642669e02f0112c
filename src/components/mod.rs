pub mod carousel;

mod icon;
pub use icon::*;

mod nav_button;
pub use nav_button::*;

mod navigation;
pub use navigation::*;

mod project_card;
pub use project_card::*;

mod theme_toggle;
pub use theme_toggle::*;
