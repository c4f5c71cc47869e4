//! Search strategies for weighted terrain grids.
//!
//! Every strategy answers the same question: given a [`Grid`], a start and a
//! goal, which cells does the agent walk through? They differ in how they
//! order their frontier and account for cost:
//!
//! | Strategy | Frontier | Ordering key |
//! |---|---|---|
//! | [`Direct`] | none | rows first, then columns |
//! | [`Aki`] | stack, batches prepended | cost of the discovered cell |
//! | [`Jocke`] | queue, batches appended | average cost around the discovered cell |
//! | [`Bole`] | heap | `g` through the parent + straight-line distance of the parent |
//! | [`Draza`] | heap | `(g, depth)` |
//!
//! Only `Bole` and `Draza` account for accumulated cost; `Aki` and `Jocke`
//! are greedy and can return expensive paths.
//!
//! All strategies implement [`Strategy`]; [`StrategyKind`] selects one at
//! run time. Each call owns its own frontier, visited set and parent
//! relation, so a shared `&Grid` can be searched from several threads.
//!
//! [`Grid`]: wayfind_core::Grid

mod aki;
mod bole;
mod direct;
mod draza;
mod error;
mod frontier;
mod heuristic;
mod jocke;
mod kind;
mod path;
mod reconstruct;
mod search;
mod traits;

pub use aki::Aki;
pub use bole::Bole;
pub use direct::Direct;
pub use draza::Draza;
pub use error::PathError;
pub use heuristic::{NO_ESTIMATE, StraightLine, euclidean, local_cost, manhattan, neighbor_average};
pub use jocke::Jocke;
pub use kind::{StrategyKind, UnknownStrategy};
pub use path::Path;
pub use reconstruct::{Link, Parents, reconstruct};
pub use search::{Expansion, Search};
pub use traits::Strategy;
