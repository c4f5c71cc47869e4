use std::fmt;
use std::str::FromStr;

use wayfind_core::{Grid, Pos};

use crate::aki::Aki;
use crate::bole::Bole;
use crate::direct::Direct;
use crate::draza::Draza;
use crate::error::PathError;
use crate::jocke::Jocke;
use crate::search::Search;
use crate::traits::Strategy;

/// Run-time selection of a [`Strategy`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    Direct,
    Aki,
    Jocke,
    Bole,
    Draza,
}

impl StrategyKind {
    /// Every strategy, baseline first.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Direct,
        StrategyKind::Aki,
        StrategyKind::Jocke,
        StrategyKind::Bole,
        StrategyKind::Draza,
    ];

    /// Whether the strategy always finds the cheapest path.
    pub const fn is_cost_optimal(self) -> bool {
        matches!(self, StrategyKind::Draza)
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &'static str {
        match self {
            StrategyKind::Direct => Direct.name(),
            StrategyKind::Aki => Aki.name(),
            StrategyKind::Jocke => Jocke.name(),
            StrategyKind::Bole => Bole.name(),
            StrategyKind::Draza => Draza.name(),
        }
    }

    fn search(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Search, PathError> {
        match self {
            StrategyKind::Direct => Direct.search(grid, start, goal),
            StrategyKind::Aki => Aki.search(grid, start, goal),
            StrategyKind::Jocke => Jocke.search(grid, start, goal),
            StrategyKind::Bole => Bole.search(grid, start, goal),
            StrategyKind::Draza => Draza.search(grid, start, goal),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d} (expected one of direct, aki, jocke, bole, draza)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
