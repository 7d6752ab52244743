//! RGBA color type for text foregrounds and backgrounds.
//!
//! Colors here are straight (non-premultiplied) alpha: nothing in this
//! crate composites, and straight storage keeps equality exact across the
//! emphasize/restore round trip.

/// A straight-alpha RGBA color with `f32` components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component (1.0 = opaque).
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The stand-in for the platform "alternate selected control text"
    /// color: the foreground used on top of a selection highlight.
    ///
    /// This is the default emphasized text color for labels.
    pub const ALTERNATE_SELECTED_TEXT: Self = Self::WHITE;

    /// The stand-in for the platform secondary label color.
    pub const SECONDARY_LABEL: Self = Self::new(0.5, 0.5, 0.5, 1.0);

    /// The conventional hyperlink blue.
    pub const LINK: Self = Self::from_rgb8(0, 104, 218);

    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Return this color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Check if the color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8() {
        let c = Color::from_rgb8(255, 0, 127);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 127.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::BLACK.with_alpha(0.5);
        assert_eq!(c.a, 0.5);
        assert!(!c.is_opaque());
        assert!(Color::WHITE.is_opaque());
    }

    #[test]
    fn test_round_trip_equality() {
        // The emphasis transform relies on exact equality after save/restore.
        let c = Color::from_rgba8(12, 34, 56, 78);
        assert_eq!(c, c);
        assert_ne!(c, c.with_alpha(1.0));
    }
}
