use std::borrow::Cow;

use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use crate::assets::assets::AssetProvider;

/// Icons bundled with the portfolio crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct FolioAssets;

impl AssetProvider for FolioAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(FolioAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioIconKind;

    #[test]
    fn test_every_icon_kind_is_embedded() {
        for icon in FolioIconKind::ALL {
            let path = icon.path();
            assert!(
                AssetProvider::get(&FolioAssets, &path).is_some(),
                "missing embedded icon {path}"
            );
        }
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let icons = AssetProvider::list(&FolioAssets, "icons/").unwrap();
        assert!(icons.iter().all(|p| p.starts_with("icons/")));
        assert!(!icons.is_empty());

        assert!(AssetProvider::list(&FolioAssets, "fonts/").unwrap().is_empty());
    }
}
