//! **wayfind-core**: weighted terrain grids (core types).
//!
//! This crate provides the foundational types used across the *wayfind*
//! workspace: grid positions, terrain kinds with their traversal costs, the
//! immutable [`Grid`] of [`Cell`]s searched by `wayfind-paths`, ASCII map
//! parsing and random terrain generation.

pub mod ascii;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod terrain;

pub use cell::Cell;
pub use error::MapError;
pub use geom::{Dir, Pos};
pub use grid::Grid;
pub use mapgen::TerrainGen;
pub use terrain::{CostTable, Terrain};
