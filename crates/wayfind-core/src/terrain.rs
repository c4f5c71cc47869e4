//! Terrain kinds and the [`CostTable`] that prices them.

use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

/// The kind of ground a cell is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    Stone,
    Water,
    Road,
    Grass,
    Mud,
    Dune,
}

impl Terrain {
    /// Every terrain kind, in declaration order.
    pub const ALL: [Terrain; 6] = [
        Terrain::Stone,
        Terrain::Water,
        Terrain::Road,
        Terrain::Grass,
        Terrain::Mud,
        Terrain::Dune,
    ];

    /// Single-letter map symbol.
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Stone => 's',
            Terrain::Water => 'w',
            Terrain::Road => 'r',
            Terrain::Grass => 'g',
            Terrain::Mud => 'm',
            Terrain::Dune => 'd',
        }
    }

    /// Inverse of [`symbol`](Self::symbol). Case-insensitive.
    pub fn from_symbol(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.symbol() == ch)
    }

    /// Lowercase name, as used in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Stone => "stone",
            Terrain::Water => "water",
            Terrain::Road => "road",
            Terrain::Grass => "grass",
            Terrain::Mud => "mud",
            Terrain::Dune => "dune",
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Terrain {
    type Err = MapError;

    /// Accepts a full name (`"grass"`) or a symbol (`"g"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(t) = Self::ALL.into_iter().find(|t| t.name() == lower) {
            return Ok(t);
        }
        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_symbol(ch).ok_or(MapError::UnknownKind(s.to_string())),
            _ => Err(MapError::UnknownKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CostTable
// ---------------------------------------------------------------------------

/// Traversal cost of each terrain kind. Every cost is at least 1.
///
/// The default prices make stone and water nearly prohibitive while keeping
/// them traversable:
///
/// | terrain | cost |
/// |---|---|
/// | stone | 1000 |
/// | water | 500 |
/// | road | 2 |
/// | grass | 3 |
/// | mud | 5 |
/// | dune | 7 |
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CostTableRepr", into = "CostTableRepr")
)]
pub struct CostTable {
    costs: [i32; 6],
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            costs: [1000, 500, 2, 3, 5, 7],
        }
    }
}

impl CostTable {
    /// A table charging `cost` for every terrain kind.
    pub fn uniform(cost: i32) -> Result<Self, MapError> {
        Terrain::ALL
            .into_iter()
            .try_fold(Self::default(), |table, t| table.with(t, cost))
    }

    /// Override the cost of one terrain kind (builder).
    pub fn with(mut self, terrain: Terrain, cost: i32) -> Result<Self, MapError> {
        if cost < 1 {
            return Err(MapError::NonPositiveCost { terrain, cost });
        }
        self.costs[terrain.slot()] = cost;
        Ok(self)
    }

    /// Cost of stepping onto a cell of the given kind.
    #[inline]
    pub fn cost(&self, terrain: Terrain) -> i32 {
        self.costs[terrain.slot()]
    }

    /// Iterate `(terrain, cost)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Terrain, i32)> + '_ {
        Terrain::ALL.into_iter().map(|t| (t, self.cost(t)))
    }
}

/// Named-field form used for (de)serialization so config files read
/// `road = 2` rather than a bare array.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CostTableRepr {
    stone: i32,
    water: i32,
    road: i32,
    grass: i32,
    mud: i32,
    dune: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<CostTableRepr> for CostTable {
    type Error = MapError;

    fn try_from(r: CostTableRepr) -> Result<Self, Self::Error> {
        CostTable::default()
            .with(Terrain::Stone, r.stone)?
            .with(Terrain::Water, r.water)?
            .with(Terrain::Road, r.road)?
            .with(Terrain::Grass, r.grass)?
            .with(Terrain::Mud, r.mud)?
            .with(Terrain::Dune, r.dune)
    }
}

#[cfg(feature = "serde")]
impl From<CostTable> for CostTableRepr {
    fn from(t: CostTable) -> Self {
        Self {
            stone: t.cost(Terrain::Stone),
            water: t.cost(Terrain::Water),
            road: t.cost(Terrain::Road),
            grass: t.cost(Terrain::Grass),
            mud: t.cost(Terrain::Mud),
            dune: t.cost(Terrain::Dune),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_costs() {
        let t = CostTable::default();
        assert_eq!(t.cost(Terrain::Stone), 1000);
        assert_eq!(t.cost(Terrain::Water), 500);
        assert_eq!(t.cost(Terrain::Road), 2);
        assert_eq!(t.cost(Terrain::Grass), 3);
        assert_eq!(t.cost(Terrain::Mud), 5);
        assert_eq!(t.cost(Terrain::Dune), 7);
    }

    #[test]
    fn override_cost() {
        let t = CostTable::default().with(Terrain::Road, 1).unwrap();
        assert_eq!(t.cost(Terrain::Road), 1);
        assert_eq!(t.cost(Terrain::Grass), 3);
    }

    #[test]
    fn reject_non_positive_cost() {
        let err = CostTable::default().with(Terrain::Mud, 0).unwrap_err();
        assert_eq!(
            err,
            MapError::NonPositiveCost {
                terrain: Terrain::Mud,
                cost: 0
            }
        );
        assert!(CostTable::uniform(-3).is_err());
    }

    #[test]
    fn symbols_are_distinct() {
        for a in Terrain::ALL {
            for b in Terrain::ALL {
                if a != b {
                    assert_ne!(a.symbol(), b.symbol(), "{a} and {b} share a symbol");
                }
            }
            assert_eq!(Terrain::from_symbol(a.symbol()), Some(a));
        }
    }

    #[test]
    fn parse_names_and_symbols() {
        assert_eq!("grass".parse::<Terrain>().unwrap(), Terrain::Grass);
        assert_eq!("Dune".parse::<Terrain>().unwrap(), Terrain::Dune);
        assert_eq!("w".parse::<Terrain>().unwrap(), Terrain::Water);
        assert!("lava".parse::<Terrain>().is_err());
        assert!("x".parse::<Terrain>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_table_round_trip() {
        let t = CostTable::default().with(Terrain::Dune, 9).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"dune\":9"));
        let back: CostTable = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn cost_table_rejects_zero() {
        let json = r#"{"stone":1000,"water":500,"road":0,"grass":3,"mud":5,"dune":7}"#;
        assert!(serde_json::from_str::<CostTable>(json).is_err());
    }
}
