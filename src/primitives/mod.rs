mod section_navigator;
pub use section_navigator::*;
