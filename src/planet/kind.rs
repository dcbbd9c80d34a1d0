use std::fmt;

/// Variant tag carried by every planet.
///
/// Discriminants are stable and exposed through [`PlanetKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PlanetKind {
    /// Untyped body.
    Other = 0,
    /// Gas giant.
    Gas = 1,
    /// Rocky, terrestrial planet.
    Terrestrial = 2,
    /// Ocean world.
    Ocean = 3,
}

impl PlanetKind {
    /// All kinds in discriminant order.
    pub const ALL: [PlanetKind; 4] = [
        PlanetKind::Other,
        PlanetKind::Gas,
        PlanetKind::Terrestrial,
        PlanetKind::Ocean,
    ];

    /// Stable numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`PlanetKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Lowercase label used in listings.
    pub fn label(self) -> &'static str {
        match self {
            PlanetKind::Other => "other",
            PlanetKind::Gas => "gas giant",
            PlanetKind::Terrestrial => "terrestrial",
            PlanetKind::Ocean => "ocean world",
        }
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
