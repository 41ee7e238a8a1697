//! Fixed sequential color ramps (ColorBrewer, five classes).

use super::Rgb;

/// Color for features without a usable value. Not part of any palette.
pub const NO_DATA_COLOR: Rgb = Rgb::hex(0xcccccc);

/// Ordered colors, lowest bucket first.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    colors: &'static [Rgb],
}

impl Palette {
    pub const fn new(name: &'static str, colors: &'static [Rgb]) -> Self {
        Self { name, colors }
    }

    #[inline] pub fn name(&self) -> &'static str { self.name }
    #[inline] pub fn colors(&self) -> &'static [Rgb] { self.colors }
    #[inline] pub fn len(&self) -> usize { self.colors.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Color for bucket `index`; indices past the end clamp to the darkest color.
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index.min(self.len().saturating_sub(1))).copied()
    }
}

pub static PURPLES: Palette = Palette {
    name: "Purples",
    colors: &[
        Rgb::hex(0xf2f0f7), Rgb::hex(0xcbc9e2), Rgb::hex(0x9e9ac8), Rgb::hex(0x756bb1), Rgb::hex(0x54278f),
    ],
};

pub static ORANGES: Palette = Palette {
    name: "Oranges",
    colors: &[
        Rgb::hex(0xfeedde), Rgb::hex(0xfdbe85), Rgb::hex(0xfd8d3c), Rgb::hex(0xe6550d), Rgb::hex(0xa63603),
    ],
};

pub static BLUES: Palette = Palette {
    name: "Blues",
    colors: &[
        Rgb::hex(0xeff3ff), Rgb::hex(0xbdd7e7), Rgb::hex(0x6baed6), Rgb::hex(0x3182bd), Rgb::hex(0x08519c),
    ],
};

pub static REDS: Palette = Palette {
    name: "Reds",
    colors: &[
        Rgb::hex(0xfee5d9), Rgb::hex(0xfcae91), Rgb::hex(0xfb6a4a), Rgb::hex(0xde2d26), Rgb::hex(0xa50f15),
    ],
};

pub static GREENS: Palette = Palette {
    name: "Greens",
    colors: &[
        Rgb::hex(0xedf8e9), Rgb::hex(0xbae4b3), Rgb::hex(0x74c476), Rgb::hex(0x31a354), Rgb::hex(0x006d2c),
    ],
};

pub static YELLOW_ORANGE_BROWN: Palette = Palette {
    name: "YlOrBr",
    colors: &[
        Rgb::hex(0xffffd4), Rgb::hex(0xfed98e), Rgb::hex(0xfe9929), Rgb::hex(0xd95f0e), Rgb::hex(0x993404),
    ],
};
