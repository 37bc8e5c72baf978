#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMapKinds {
    #[default]
    AsciiRamp,
    ColourBands,
}

impl GlyphMapKinds {
    pub const ALL: &'static [Self] = &[Self::AsciiRamp, Self::ColourBands];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::AsciiRamp => "ASCII ramp",
            Self::ColourBands => "Colour bands",
        }
    }
}

impl std::fmt::Display for GlyphMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
