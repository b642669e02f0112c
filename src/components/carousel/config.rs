use std::time::Duration;

use gpui::{Pixels, px};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MIN_AUTOPLAY_DELAY: Duration = Duration::from_millis(100);

/// Mount-time options for a [`Carousel`](super::Carousel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    #[serde(
        serialize_with = "ser_millis",
        deserialize_with = "de_millis"
    )]
    pub autoplay_delay: Duration,
    pub autoplay: bool,
    pub show_pagination: bool,
    pub show_navigation: bool,
    /// Fraction of a card width a drag has to cover to change cards.
    pub drag_threshold: f32,
    pub card_width: f32,
    pub gap: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_delay: Duration::from_millis(5000),
            autoplay: true,
            show_pagination: true,
            show_navigation: true,
            drag_threshold: 0.25,
            card_width: 380.,
            gap: 24.,
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_delay(mut self, delay: Duration) -> Self {
        self.autoplay_delay = delay;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn show_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    pub fn show_navigation(mut self, show: bool) -> Self {
        self.show_navigation = show;
        self
    }

    pub fn drag_threshold(mut self, fraction: f32) -> Self {
        self.drag_threshold = fraction;
        self
    }

    pub fn card_width(mut self, width: impl Into<Pixels>) -> Self {
        self.card_width = width.into().to_f64() as f32;
        self
    }

    /// Clamps out of range values instead of rejecting them.
    pub fn normalized(mut self) -> Self {
        self.autoplay_delay = self.autoplay_delay.max(MIN_AUTOPLAY_DELAY);

        let default = Self::default();
        if !(self.drag_threshold > 0.) {
            self.drag_threshold = default.drag_threshold;
        }
        self.drag_threshold = self.drag_threshold.min(1.);

        if !(self.card_width > 0.) {
            self.card_width = default.card_width;
        }
        if !(self.gap >= 0.) {
            self.gap = 0.;
        }

        self
    }

    /// Drag distance, in pixels, past which a release changes cards.
    pub fn drag_threshold_px(&self) -> f32 {
        self.card_width * self.drag_threshold
    }

    pub fn card_width_px(&self) -> Pixels {
        px(self.card_width)
    }

    pub fn gap_px(&self) -> Pixels {
        px(self.gap)
    }
}

fn ser_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

fn de_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();

        assert_eq!(config.autoplay_delay, Duration::from_millis(5000));
        assert!(config.autoplay);
        assert_eq!(config.drag_threshold_px(), 95.);
    }

    #[test]
    fn test_deserializes_mount_options() {
        let config: CarouselConfig = serde_json::from_str(
            r#"{ "autoplayDelay": 3000, "showPagination": false, "showNavigation": true }"#,
        )
        .unwrap();

        assert_eq!(config.autoplay_delay, Duration::from_millis(3000));
        assert!(!config.show_pagination);
        assert!(config.show_navigation);
        assert_eq!(config.card_width, CarouselConfig::default().card_width);
    }

    #[test]
    fn test_normalized_clamps_degenerate_values() {
        let config = CarouselConfig {
            autoplay_delay: Duration::ZERO,
            drag_threshold: -1.,
            card_width: f32::NAN,
            gap: -4.,
            ..Default::default()
        }
        .normalized();

        assert_eq!(config.autoplay_delay, MIN_AUTOPLAY_DELAY);
        assert_eq!(config.drag_threshold, 0.25);
        assert_eq!(config.card_width, 380.);
        assert_eq!(config.gap, 0.);

        let config = CarouselConfig::default().drag_threshold(3.).normalized();
        assert_eq!(config.drag_threshold, 1.);
    }
}
