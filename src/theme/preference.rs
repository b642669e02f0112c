use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use gpui::{App, Global, WindowAppearance};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::{ActiveVariantId, Theme, ThemeExt, ThemeVariantKind};

/// Which theme variant the user asked for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn resolve(self, system: ThemeVariantKind) -> ThemeVariantKind {
        match self {
            ThemePreference::Light => ThemeVariantKind::Light,
            ThemePreference::Dark => ThemeVariantKind::Dark,
            ThemePreference::System => system,
        }
    }
}

pub fn appearance_variant_kind(appearance: WindowAppearance) -> ThemeVariantKind {
    match appearance {
        WindowAppearance::Light | WindowAppearance::VibrantLight => ThemeVariantKind::Light,
        WindowAppearance::Dark | WindowAppearance::VibrantDark => ThemeVariantKind::Dark,
    }
}

/// Everything persisted between sessions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: ThemePreference,
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("could not access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preference file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON file holding [`Preferences`].
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    const FILE_NAME: &'static str = "preferences.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store in the platform's configuration directory, if one exists.
    pub fn default_location() -> Option<Self> {
        let dirs = ProjectDirs::from("dev", "gpui_folio", "gpui_folio")?;
        Some(Self::new(dirs.config_dir().join(Self::FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored preferences. A missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Preferences::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str(&contents).map_err(|source| PreferenceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(preferences).map_err(|source| {
            PreferenceError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        fs::write(&self.path, json).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Global holding the current preference and where it is persisted.
pub struct ThemeProvider {
    preference: ThemePreference,
    store: Option<PreferenceStore>,
}

impl Global for ThemeProvider {}

/// Installs the bundled theme (unless one is already set) and a provider
/// backed by the default preference store.
pub fn init(cx: &mut App) {
    init_with_store(cx, PreferenceStore::default_location());
}

pub fn init_with_store(cx: &mut App, store: Option<PreferenceStore>) {
    if !cx.has_global::<Theme>() {
        cx.set_theme(Theme::DEFAULT);
    }

    let preference = match store.as_ref().map(PreferenceStore::load) {
        Some(Ok(preferences)) => preferences.theme,
        Some(Err(err)) => {
            log::warn!("ignoring stored preferences: {err}");
            ThemePreference::default()
        }
        None => ThemePreference::default(),
    };

    cx.set_global(ThemeProvider { preference, store });
    apply_preference(cx);
}

/// Get/set access to the theme preference.
pub trait ThemePreferenceExt {
    fn theme_preference(&self) -> ThemePreference;

    /// Activates the matching variant and persists the choice. Persistence
    /// failures are logged, never surfaced.
    fn set_theme_preference(&mut self, preference: ThemePreference);

    /// The variant kind currently on screen.
    fn resolved_variant_kind(&self) -> ThemeVariantKind;

    /// Re-resolves a `System` preference after the OS appearance changed.
    fn sync_system_appearance(&mut self);
}

impl ThemePreferenceExt for App {
    fn theme_preference(&self) -> ThemePreference {
        self.try_global::<ThemeProvider>()
            .map(|provider| provider.preference)
            .unwrap_or_default()
    }

    fn set_theme_preference(&mut self, preference: ThemePreference) {
        if !self.has_global::<ThemeProvider>() {
            self.set_global(ThemeProvider {
                preference,
                store: None,
            });
        }

        let provider = self.global_mut::<ThemeProvider>();
        provider.preference = preference;
        let store = provider.store.clone();

        log::debug!("theme preference set to {preference:?}");
        apply_preference(self);

        if let Some(store) = store
            && let Err(err) = store.save(&Preferences { theme: preference })
        {
            log::warn!("could not persist theme preference: {err}");
        }
    }

    fn resolved_variant_kind(&self) -> ThemeVariantKind {
        self.active_variant().kind
    }

    fn sync_system_appearance(&mut self) {
        if self.theme_preference() == ThemePreference::System {
            apply_preference(self);
        }
    }
}

fn apply_preference(cx: &mut App) {
    let system = appearance_variant_kind(cx.window_appearance());
    let kind = cx.theme_preference().resolve(system);
    let ix = cx.get_theme().variants.position(kind).unwrap_or(0);

    cx.set_global(ActiveVariantId(ix));
    cx.refresh_windows();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_resolution() {
        use ThemeVariantKind::{Dark, Light};

        assert_eq!(ThemePreference::Light.resolve(Dark), Light);
        assert_eq!(ThemePreference::Dark.resolve(Light), Dark);
        assert_eq!(ThemePreference::System.resolve(Dark), Dark);
        assert_eq!(ThemePreference::System.resolve(Light), Light);
    }

    #[test]
    fn test_preference_serializes_lowercase() {
        let json = serde_json::to_string(&Preferences {
            theme: ThemePreference::Dark,
        })
        .unwrap();
        assert_eq!(json, r#"{"theme":"dark"}"#);

        let parsed: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.theme, ThemePreference::System);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("absent.json"));

        assert_eq!(store.load().unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested/preferences.json"));
        let preferences = Preferences {
            theme: ThemePreference::Light,
        };

        store.save(&preferences).unwrap();
        assert_eq!(store.load().unwrap(), preferences);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        let err = PreferenceStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PreferenceError::Malformed { .. }));
        assert!(err.to_string().contains("preferences.json"));
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_init_reads_stored_preference(cx: &mut TestAppContext) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("preferences.json"));
        store
            .save(&Preferences {
                theme: ThemePreference::Dark,
            })
            .unwrap();

        cx.update(|cx| {
            init_with_store(cx, Some(store));

            assert_eq!(cx.theme_preference(), ThemePreference::Dark);
            assert_eq!(cx.resolved_variant_kind(), ThemeVariantKind::Dark);
        });
    }

    #[gpui::test]
    fn test_malformed_store_falls_back_to_system(cx: &mut TestAppContext) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "\"dark\"").unwrap();

        cx.update(|cx| {
            init_with_store(cx, Some(PreferenceStore::new(&path)));

            assert_eq!(cx.theme_preference(), ThemePreference::System);
            let system = appearance_variant_kind(cx.window_appearance());
            assert_eq!(cx.resolved_variant_kind(), system);
        });
    }

    #[gpui::test]
    fn test_set_preference_switches_variant_and_persists(cx: &mut TestAppContext) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("preferences.json"));

        cx.update(|cx| {
            init_with_store(cx, Some(store.clone()));

            cx.set_theme_preference(ThemePreference::Light);
            assert_eq!(cx.resolved_variant_kind(), ThemeVariantKind::Light);

            cx.set_theme_preference(ThemePreference::Dark);
            assert_eq!(cx.resolved_variant_kind(), ThemeVariantKind::Dark);
        });

        assert_eq!(store.load().unwrap().theme, ThemePreference::Dark);
    }

    #[gpui::test]
    fn test_set_preference_without_provider(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            assert_eq!(cx.theme_preference(), ThemePreference::System);

            cx.set_theme_preference(ThemePreference::Dark);
            assert_eq!(cx.theme_preference(), ThemePreference::Dark);
            assert_eq!(cx.resolved_variant_kind(), ThemeVariantKind::Dark);
        });
    }
}
