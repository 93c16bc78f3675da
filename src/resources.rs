//! Packaged assets
//!
//! Logos and fonts are compiled into the watchface and referenced by
//! numeric ids. Nothing here is configurable at runtime.

use embedded_graphics::geometry::Size;

/// Logo image assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum ImageId {
    LogoBrewdog = 1,
    LogoMagicrock1 = 2,
    LogoMagicrock2 = 3,
    LogoGuinness = 4,
    LogoYeastieboys = 5,
    LogoFlyingdog = 6,
}

impl ImageId {
    /// Raw resource id
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Nominal size of the packaged image
    pub const fn size(self) -> Size {
        Size::new(50, 50)
    }

    /// Short label drawn on the logo badge
    pub const fn label(self) -> &'static str {
        match self {
            ImageId::LogoBrewdog => "BD",
            ImageId::LogoMagicrock1 => "MR",
            ImageId::LogoMagicrock2 => "MR2",
            ImageId::LogoGuinness => "G",
            ImageId::LogoYeastieboys => "YB",
            ImageId::LogoFlyingdog => "FD",
        }
    }
}

/// Font assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum FontId {
    RobotoRegular48 = 100,
    RobotoRegular24 = 101,
}

impl FontId {
    /// Raw resource id
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Nominal glyph height in pixels
    pub const fn pixel_height(self) -> u32 {
        match self {
            FontId::RobotoRegular48 => 48,
            FontId::RobotoRegular24 => 24,
        }
    }
}

/// Ordered, immutable set of logos to rotate through
#[derive(Debug, Clone, Copy)]
pub struct LogoSet {
    logos: &'static [ImageId],
}

impl LogoSet {
    /// Create a logo set. Panics at compile time for an empty set when
    /// used in a `const`.
    pub const fn new(logos: &'static [ImageId]) -> Self {
        assert!(!logos.is_empty(), "logo set must not be empty");
        Self { logos }
    }

    /// Number of logos in the set
    pub const fn len(&self) -> usize {
        self.logos.len()
    }

    /// Always false, the set is checked on construction
    pub const fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ImageId> {
        self.logos.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ImageId> + 'static {
        self.logos.iter().copied()
    }
}

/// Logos packaged with the watchface
pub const LOGOS: LogoSet = LogoSet::new(&[
    ImageId::LogoBrewdog,
    ImageId::LogoMagicrock1,
    ImageId::LogoMagicrock2,
    ImageId::LogoGuinness,
    ImageId::LogoYeastieboys,
    ImageId::LogoFlyingdog,
]);
