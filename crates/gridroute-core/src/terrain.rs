//! Terrain classification of a single grid cell.

use std::fmt;

/// What occupies a grid cell.
///
/// The integer codes returned by [`Terrain::code`] are the ones used by the
/// plaintext map dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Plain ground.
    #[default]
    Open,
    /// Blocks movement.
    Obstacle,
    /// A road marking. Costs the same as open ground.
    RoadPreferred,
    /// An accident site. Occupiable and not penalised unless the cost
    /// configuration asks for it.
    Hazard,
}

impl Terrain {
    /// All classifications, ordered by code.
    pub const ALL: [Terrain; 4] = [
        Terrain::Open,
        Terrain::Obstacle,
        Terrain::RoadPreferred,
        Terrain::Hazard,
    ];

    /// Integer code of this classification.
    pub const fn code(self) -> u8 {
        match self {
            Terrain::Open => 0,
            Terrain::Obstacle => 1,
            Terrain::RoadPreferred => 2,
            Terrain::Hazard => 3,
        }
    }

    /// Classification for an integer code, if there is one.
    pub const fn from_code(code: u8) -> Option<Terrain> {
        match code {
            0 => Some(Terrain::Open),
            1 => Some(Terrain::Obstacle),
            2 => Some(Terrain::RoadPreferred),
            3 => Some(Terrain::Hazard),
            _ => None,
        }
    }

    /// Whether a route may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Obstacle)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Open => "open",
            Terrain::Obstacle => "obstacle",
            Terrain::RoadPreferred => "road",
            Terrain::Hazard => "hazard",
        };
        f.write_str(name)
    }
}
