use gpui::{AbsoluteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::theme::{ThemeVariant, ThemeVariantKind};

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) if vec.is_empty() => Err(D::Error::custom("list can't be empty.")),
        StringOrVec::Many(vec) => Ok(vec),
    }
}

/// Both a light and a dark variant are required so every preference resolves.
pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: SmallVec<[ThemeVariant; 2]> = SmallVec::deserialize(deserializer)?;

    for kind in [ThemeVariantKind::Light, ThemeVariantKind::Dark] {
        if !value.iter().any(|variant| variant.kind == kind) {
            return Err(D::Error::custom(format!(
                "theme is missing a {kind:?} variant."
            )));
        }
    }

    Ok(value)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(pixels) => Ok(px(pixels)),
        StringOrFloat::String(string) => string
            .strip_suffix("px")
            .and_then(|string| string.parse::<f32>().ok())
            .map(px)
            .ok_or_else(|| D::Error::custom("expected string containing a f32 ending with 'px'")),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => return Ok(AbsoluteLength::Pixels(px(num))),

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("rem")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Rems(rems(value)));
            } else if let Some(string) = string.strip_suffix("px")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Pixels(px(value)));
            }
        }
    }

    Err(D::Error::custom(
        "expected f32 or string containing a f32 ending with 'rem' or 'px'",
    ))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
