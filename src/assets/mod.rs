mod assets;
pub use assets::*;
use cfg_if::cfg_if;

mod icons;
pub use icons::*;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod folio_assets;
        pub use folio_assets::*;
    }
);
