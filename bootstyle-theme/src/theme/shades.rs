use crate::color::HexColor;

/// Channel multipliers used to derive the nine shades of a color.
///
/// Index 4 is the base color; lower indices are lighter, higher are darker.
pub const SHADE_LADDER: [f32; 9] = [1.4, 1.3, 1.2, 1.1, 1.0, 0.9, 0.8, 0.7, 0.6];

/// Index of the unmodified color inside [Shades].
pub const BASE_SHADE: usize = 4;

/// Nine luminance-scaled derivatives of one color.
///
/// Computed on demand from the palette; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shades([HexColor; 9]);

impl Shades {
    /// Derive the shades of `base`.
    pub fn from_color(base: HexColor) -> Self {
        Self(SHADE_LADDER.map(|factor| base.scale(factor)))
    }

    /// Shade at `index`, clamped to the ladder.
    pub fn get(&self, index: usize) -> HexColor {
        self.0[index.min(self.0.len() - 1)]
    }

    /// The unscaled color.
    pub fn base(&self) -> HexColor {
        self.0[BASE_SHADE]
    }

    /// The shade `steps` positions lighter than the base.
    pub fn lighter(&self, steps: usize) -> HexColor {
        self.get(BASE_SHADE.saturating_sub(steps))
    }

    /// The shade `steps` positions darker than the base.
    pub fn darker(&self, steps: usize) -> HexColor {
        self.get(BASE_SHADE + steps)
    }

    /// All shades, lightest first.
    pub fn as_slice(&self) -> &[HexColor] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_applied_per_channel() {
        let shades = Shades::from_color(HexColor::from_rgb8(100, 200, 50));
        assert_eq!(shades.base(), HexColor::from_rgb8(100, 200, 50));
        assert_eq!(shades.get(0), HexColor::from_rgb8(140, 255, 70));
        assert_eq!(shades.get(8), HexColor::from_rgb8(60, 120, 30));
        assert_eq!(shades.lighter(1), shades.get(3));
        assert_eq!(shades.darker(2), shades.get(6));
    }

    #[test]
    fn steps_saturate_at_the_ends() {
        let shades = Shades::from_color(HexColor::from_u32(0x808080));
        assert_eq!(shades.lighter(10), shades.get(0));
        assert_eq!(shades.darker(10), shades.get(8));
        assert_eq!(shades.as_slice().len(), 9);
    }
}
