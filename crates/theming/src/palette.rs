//! Color palettes for brand and neutral preferences
//!
//! Each palette is a fixed scale of eleven shades keyed by the numeric stops
//! 50–950. Brand palettes exist for the seventeen chromatic values; `default`
//! and `black` carry no palette and project attribute-only, leaving colors to
//! the stylesheet. Neutral palettes exist for all five values.

use crate::preference::{Brand, Neutral};

/// The eleven shade stops of a palette, lightest to darkest
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// A complete color scale with eleven stops from lightest to darkest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Very light (50)
    pub s50: &'static str,
    /// Light (100)
    pub s100: &'static str,
    /// Light-medium (200)
    pub s200: &'static str,
    /// Medium-light (300)
    pub s300: &'static str,
    /// Medium (400)
    pub s400: &'static str,
    /// Base (500)
    pub s500: &'static str,
    /// Medium-dark (600)
    pub s600: &'static str,
    /// Dark-medium (700)
    pub s700: &'static str,
    /// Dark (800)
    pub s800: &'static str,
    /// Very dark (900)
    pub s900: &'static str,
    /// Darkest (950)
    pub s950: &'static str,
}

impl Palette {
    /// Get a color by its numeric stop (50, 100, ..., 950)
    pub fn get(&self, stop: u16) -> Option<&'static str> {
        match stop {
            50 => Some(self.s50),
            100 => Some(self.s100),
            200 => Some(self.s200),
            300 => Some(self.s300),
            400 => Some(self.s400),
            500 => Some(self.s500),
            600 => Some(self.s600),
            700 => Some(self.s700),
            800 => Some(self.s800),
            900 => Some(self.s900),
            950 => Some(self.s950),
            _ => None,
        }
    }

    /// Iterate over all (stop, color) pairs in ascending stop order
    pub fn entries(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        SHADES.iter().map(|&stop| (stop, self.get(stop).expect("fixed stop")))
    }
}

const fn palette(colors: [&'static str; 11]) -> Palette {
    Palette {
        s50: colors[0],
        s100: colors[1],
        s200: colors[2],
        s300: colors[3],
        s400: colors[4],
        s500: colors[5],
        s600: colors[6],
        s700: colors[7],
        s800: colors[8],
        s900: colors[9],
        s950: colors[10],
    }
}

// =============================================================================
// Brand palettes
// =============================================================================

static RED: Palette = palette([
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d", "#450a0a",
]);

static ORANGE: Palette = palette([
    "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c",
    "#9a3412", "#7c2d12", "#431407",
]);

static AMBER: Palette = palette([
    "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
    "#92400e", "#78350f", "#451a03",
]);

static YELLOW: Palette = palette([
    "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04", "#a16207",
    "#854d0e", "#713f12", "#422006",
]);

static LIME: Palette = palette([
    "#f7fee7", "#ecfccb", "#d9f99d", "#bef264", "#a3e635", "#84cc16", "#65a30d", "#4d7c0f",
    "#3f6212", "#365314", "#1a2e05",
]);

static GREEN: Palette = palette([
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d", "#052e16",
]);

static EMERALD: Palette = palette([
    "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857",
    "#065f46", "#064e3b", "#022c22",
]);

static TEAL: Palette = palette([
    "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488", "#0f766e",
    "#115e59", "#134e4a", "#042f2e",
]);

static CYAN: Palette = palette([
    "#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0891b2", "#0e7490",
    "#155e75", "#164e63", "#083344",
]);

static SKY: Palette = palette([
    "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1",
    "#075985", "#0c4a6e", "#082f49",
]);

static BLUE: Palette = palette([
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a", "#172554",
]);

static INDIGO: Palette = palette([
    "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca",
    "#3730a3", "#312e81", "#1e1b4b",
]);

static VIOLET: Palette = palette([
    "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
    "#5b21b6", "#4c1d95", "#2e1065",
]);

static PURPLE: Palette = palette([
    "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce",
    "#6b21a8", "#581c87", "#3b0764",
]);

static FUCHSIA: Palette = palette([
    "#fdf4ff", "#fae8ff", "#f5d0fe", "#f0abfc", "#e879f9", "#d946ef", "#c026d3", "#a21caf",
    "#86198f", "#701a75", "#4a044e",
]);

static PINK: Palette = palette([
    "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d",
    "#9d174d", "#831843", "#500724",
]);

static ROSE: Palette = palette([
    "#fff1f2", "#ffe4e6", "#fecdd3", "#fda4af", "#fb7185", "#f43f5e", "#e11d48", "#be123c",
    "#9f1239", "#881337", "#4c0519",
]);

// =============================================================================
// Neutral palettes
// =============================================================================

static SLATE: Palette = palette([
    "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
    "#1e293b", "#0f172a", "#020617",
]);

static GRAY: Palette = palette([
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827", "#030712",
]);

static ZINC: Palette = palette([
    "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b", "#3f3f46",
    "#27272a", "#18181b", "#09090b",
]);

static NEUTRAL: Palette = palette([
    "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040",
    "#262626", "#171717", "#0a0a0a",
]);

static STONE: Palette = palette([
    "#fafaf9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c", "#57534e", "#44403c",
    "#292524", "#1c1917", "#0c0a09",
]);

impl Brand {
    /// Resolve the palette for this brand
    ///
    /// `Default` and `Black` carry no palette; projection sets the marker
    /// attribute only and leaves colors to the stylesheet.
    pub fn palette(&self) -> Option<&'static Palette> {
        match self {
            Brand::Default | Brand::Black => None,
            Brand::Red => Some(&RED),
            Brand::Orange => Some(&ORANGE),
            Brand::Amber => Some(&AMBER),
            Brand::Yellow => Some(&YELLOW),
            Brand::Lime => Some(&LIME),
            Brand::Green => Some(&GREEN),
            Brand::Emerald => Some(&EMERALD),
            Brand::Teal => Some(&TEAL),
            Brand::Cyan => Some(&CYAN),
            Brand::Sky => Some(&SKY),
            Brand::Blue => Some(&BLUE),
            Brand::Indigo => Some(&INDIGO),
            Brand::Violet => Some(&VIOLET),
            Brand::Purple => Some(&PURPLE),
            Brand::Fuchsia => Some(&FUCHSIA),
            Brand::Pink => Some(&PINK),
            Brand::Rose => Some(&ROSE),
        }
    }
}

impl Neutral {
    /// Resolve the palette for this neutral value
    pub fn palette(&self) -> &'static Palette {
        match self {
            Neutral::Slate => &SLATE,
            Neutral::Gray => &GRAY,
            Neutral::Zinc => &ZINC,
            Neutral::Neutral => &NEUTRAL,
            Neutral::Stone => &STONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_palette_get_known_stops() {
        assert_eq!(EMERALD.get(500), Some("#10b981"));
        assert_eq!(SLATE.get(50), Some("#f8fafc"));
        assert_eq!(SLATE.get(950), Some("#020617"));
        assert_eq!(EMERALD.get(25), None);
        assert_eq!(EMERALD.get(975), None);
    }

    #[test]
    fn test_palette_entries_order() {
        let stops: Vec<u16> = ROSE.entries().map(|(stop, _)| stop).collect();
        assert_eq!(stops, SHADES.to_vec());
    }

    #[test]
    fn test_chromatic_brands_have_complete_palettes() {
        for brand in Brand::ALL {
            let Some(palette) = brand.palette() else {
                continue;
            };
            for (stop, color) in palette.entries() {
                assert!(
                    is_hex_color(color),
                    "brand {} stop {} is not a hex color: {}",
                    brand,
                    stop,
                    color
                );
            }
        }
    }

    #[test]
    fn test_default_and_black_have_no_palette() {
        assert!(Brand::Default.palette().is_none());
        assert!(Brand::Black.palette().is_none());
        let with_palette = Brand::ALL.iter().filter(|b| b.palette().is_some()).count();
        assert_eq!(with_palette, 17);
    }

    #[test]
    fn test_neutral_palettes_complete() {
        for neutral in Neutral::ALL {
            let palette = neutral.palette();
            for (stop, color) in palette.entries() {
                assert!(
                    is_hex_color(color),
                    "neutral {} stop {} is not a hex color: {}",
                    neutral,
                    stop,
                    color
                );
            }
        }
    }

    #[test]
    fn test_neutral_base_values() {
        assert_eq!(Neutral::Slate.palette().s500, "#64748b");
        assert_eq!(Neutral::Gray.palette().s500, "#6b7280");
        assert_eq!(Neutral::Zinc.palette().s500, "#71717a");
        assert_eq!(Neutral::Neutral.palette().s500, "#737373");
        assert_eq!(Neutral::Stone.palette().s500, "#78716c");
    }
}
