use serde::{Serialize, Serializer};

/// 24-bit sRGB colour as authored (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const GRAY: Color = Color(0x808080);
    pub const LIGHT_GREEN: Color = Color(0x90ee90);

    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    pub const fn hex(&self) -> u32 {
        self.0
    }

    /// Channels in 0..=1, still sRGB encoded
    pub fn to_srgb(&self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }

    /// Channels decoded to linear light for shading
    pub fn to_linear(&self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{:06x}", self.0))
    }
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
