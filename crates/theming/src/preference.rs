//! Preference kinds and their value sets
//!
//! Four independent preference dimensions drive the look of the application:
//! brand color, neutral palette, corner radius, and font family. Each value
//! set is closed; anything read from storage that does not parse falls back
//! to the kind's default at the call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four themeable dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    /// Brand (primary) color
    Brand,
    /// Neutral (gray) palette
    Neutral,
    /// Corner radius scale
    Radius,
    /// Font family
    Font,
}

impl PreferenceKind {
    /// Storage key for this kind
    ///
    /// The font key is namespaced to avoid colliding with other tools that
    /// share the store; the original keys are kept for the rest.
    pub fn storage_key(&self) -> &'static str {
        match self {
            PreferenceKind::Brand => "brand",
            PreferenceKind::Neutral => "neutral",
            PreferenceKind::Radius => "radius",
            PreferenceKind::Font => "lumo-font",
        }
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceKind::Brand => write!(f, "brand"),
            PreferenceKind::Neutral => write!(f, "neutral"),
            PreferenceKind::Radius => write!(f, "radius"),
            PreferenceKind::Font => write!(f, "font"),
        }
    }
}

// =============================================================================
// Brand
// =============================================================================

/// Brand color selection
///
/// `Default` means "no override": the attribute is removed and stylesheet
/// defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// No brand override (stylesheet defaults)
    #[default]
    Default,
    /// Monochrome brand
    Black,
    /// Red
    Red,
    /// Orange
    Orange,
    /// Amber
    Amber,
    /// Yellow
    Yellow,
    /// Lime
    Lime,
    /// Green
    Green,
    /// Emerald
    Emerald,
    /// Teal
    Teal,
    /// Cyan
    Cyan,
    /// Sky
    Sky,
    /// Blue
    Blue,
    /// Indigo
    Indigo,
    /// Violet
    Violet,
    /// Purple
    Purple,
    /// Fuchsia
    Fuchsia,
    /// Pink
    Pink,
    /// Rose
    Rose,
}

impl Brand {
    /// All selectable brand values
    pub const ALL: [Brand; 19] = [
        Brand::Default,
        Brand::Black,
        Brand::Red,
        Brand::Orange,
        Brand::Amber,
        Brand::Yellow,
        Brand::Lime,
        Brand::Green,
        Brand::Emerald,
        Brand::Teal,
        Brand::Cyan,
        Brand::Sky,
        Brand::Blue,
        Brand::Indigo,
        Brand::Violet,
        Brand::Purple,
        Brand::Fuchsia,
        Brand::Pink,
        Brand::Rose,
    ];

    /// The canonical string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Default => "default",
            Brand::Black => "black",
            Brand::Red => "red",
            Brand::Orange => "orange",
            Brand::Amber => "amber",
            Brand::Yellow => "yellow",
            Brand::Lime => "lime",
            Brand::Green => "green",
            Brand::Emerald => "emerald",
            Brand::Teal => "teal",
            Brand::Cyan => "cyan",
            Brand::Sky => "sky",
            Brand::Blue => "blue",
            Brand::Indigo => "indigo",
            Brand::Violet => "violet",
            Brand::Purple => "purple",
            Brand::Fuchsia => "fuchsia",
            Brand::Pink => "pink",
            Brand::Rose => "rose",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("Unknown brand: {}", s))
    }
}

// =============================================================================
// Neutral
// =============================================================================

/// Neutral (gray) palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Neutral {
    /// Slate
    #[default]
    Slate,
    /// Gray
    Gray,
    /// Zinc
    Zinc,
    /// Neutral
    Neutral,
    /// Stone
    Stone,
}

impl Neutral {
    /// All selectable neutral values
    pub const ALL: [Neutral; 5] =
        [Neutral::Slate, Neutral::Gray, Neutral::Zinc, Neutral::Neutral, Neutral::Stone];

    /// The canonical string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Neutral::Slate => "slate",
            Neutral::Gray => "gray",
            Neutral::Zinc => "zinc",
            Neutral::Neutral => "neutral",
            Neutral::Stone => "stone",
        }
    }
}

impl fmt::Display for Neutral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Neutral {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Neutral::ALL
            .iter()
            .copied()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| format!("Unknown neutral: {}", s))
    }
}

// =============================================================================
// Radius
// =============================================================================

/// Corner radius selection, in rem steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Radius {
    /// Square corners (0)
    #[serde(rename = "0")]
    Zero,
    /// 0.125rem
    #[serde(rename = "0.125")]
    Eighth,
    /// 0.25rem
    #[default]
    #[serde(rename = "0.25")]
    Quarter,
    /// 0.375rem
    #[serde(rename = "0.375")]
    ThreeEighths,
    /// 0.5rem
    #[serde(rename = "0.5")]
    Half,
}

impl Radius {
    /// All selectable radius values
    pub const ALL: [Radius; 5] =
        [Radius::Zero, Radius::Eighth, Radius::Quarter, Radius::ThreeEighths, Radius::Half];

    /// The canonical string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Radius::Zero => "0",
            Radius::Eighth => "0.125",
            Radius::Quarter => "0.25",
            Radius::ThreeEighths => "0.375",
            Radius::Half => "0.5",
        }
    }

    /// The pixel length projected as `--ui-radius`
    pub fn px(&self) -> &'static str {
        match self {
            Radius::Zero => "0px",
            Radius::Eighth => "2px",
            Radius::Quarter => "4px",
            Radius::ThreeEighths => "6px",
            Radius::Half => "8px",
        }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Radius {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Radius::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("Unknown radius: {}", s))
    }
}

// =============================================================================
// Font family
// =============================================================================

/// Font family selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// Inter
    #[default]
    Inter,
    /// DM Sans
    DmSans,
    /// Outfit
    Outfit,
    /// Roboto
    Roboto,
}

impl FontFamily {
    /// All selectable font families
    pub const ALL: [FontFamily; 4] =
        [FontFamily::Inter, FontFamily::DmSans, FontFamily::Outfit, FontFamily::Roboto];

    /// The canonical string value
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Inter => "inter",
            FontFamily::DmSans => "dm-sans",
            FontFamily::Outfit => "outfit",
            FontFamily::Roboto => "roboto",
        }
    }

    /// Root class name carrying this family
    pub fn class_name(&self) -> &'static str {
        match self {
            FontFamily::Inter => "font-sans",
            FontFamily::DmSans => "font-dm-sans",
            FontFamily::Outfit => "font-outfit",
            FontFamily::Roboto => "font-roboto",
        }
    }

    /// Human-readable label for settings pages
    pub fn label(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::DmSans => "DM Sans",
            FontFamily::Outfit => "Outfit",
            FontFamily::Roboto => "Roboto",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::ALL
            .iter()
            .copied()
            .find(|fam| fam.as_str() == s)
            .ok_or_else(|| format!("Unknown font family: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(PreferenceKind::Brand.storage_key(), "brand");
        assert_eq!(PreferenceKind::Neutral.storage_key(), "neutral");
        assert_eq!(PreferenceKind::Radius.storage_key(), "radius");
        assert_eq!(PreferenceKind::Font.storage_key(), "lumo-font");
    }

    #[test]
    fn test_brand_round_trip() {
        for brand in Brand::ALL {
            assert_eq!(brand.as_str().parse::<Brand>().unwrap(), brand);
        }
    }

    #[test]
    fn test_brand_from_str_invalid() {
        assert!("magenta".parse::<Brand>().is_err());
        assert!("".parse::<Brand>().is_err());
        assert!("Emerald".parse::<Brand>().is_err()); // values are lowercase
    }

    #[test]
    fn test_brand_defaults() {
        assert_eq!(Brand::default(), Brand::Default);
        assert_eq!(Brand::ALL.len(), 19);
    }

    #[test]
    fn test_neutral_round_trip() {
        for neutral in Neutral::ALL {
            assert_eq!(neutral.as_str().parse::<Neutral>().unwrap(), neutral);
        }
        assert_eq!(Neutral::default(), Neutral::Slate);
    }

    #[test]
    fn test_radius_round_trip() {
        for radius in Radius::ALL {
            assert_eq!(radius.as_str().parse::<Radius>().unwrap(), radius);
        }
        assert_eq!(Radius::default(), Radius::Quarter);
    }

    #[test]
    fn test_radius_px_map() {
        assert_eq!(Radius::Zero.px(), "0px");
        assert_eq!(Radius::Eighth.px(), "2px");
        assert_eq!(Radius::Quarter.px(), "4px");
        assert_eq!(Radius::ThreeEighths.px(), "6px");
        assert_eq!(Radius::Half.px(), "8px");
    }

    #[test]
    fn test_font_round_trip() {
        for font in FontFamily::ALL {
            assert_eq!(font.as_str().parse::<FontFamily>().unwrap(), font);
        }
        assert_eq!(FontFamily::default(), FontFamily::Inter);
    }

    #[test]
    fn test_font_class_names_are_distinct() {
        let classes: std::collections::HashSet<_> =
            FontFamily::ALL.iter().map(|f| f.class_name()).collect();
        assert_eq!(classes.len(), FontFamily::ALL.len());
    }

    #[test]
    fn test_serde_uses_canonical_strings() {
        assert_eq!(serde_json::to_string(&Brand::Emerald).unwrap(), "\"emerald\"");
        assert_eq!(serde_json::to_string(&Radius::Half).unwrap(), "\"0.5\"");
        assert_eq!(serde_json::to_string(&FontFamily::DmSans).unwrap(), "\"dm-sans\"");

        let radius: Radius = serde_json::from_str("\"0.125\"").unwrap();
        assert_eq!(radius, Radius::Eighth);
    }
}
