//! Terminal rendering of a grid and one search over it.

use std::error::Error;
use std::io::Write;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use wayfind_core::{Grid, MapError, Pos, Terrain};
use wayfind_paths::{Search, StrategyKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub color: bool,
    pub explored: bool,
}

/// What a single cell shows on top of its terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Bare,
    Explored,
    Step(usize),
    Start,
    Goal,
}

impl Mark {
    // Three columns per cell keeps two-digit step numbers aligned.
    fn label(self, terrain: Terrain) -> String {
        match self {
            Mark::Bare => format!(" {} ", terrain.symbol()),
            Mark::Explored => format!(" {} ", terrain.symbol().to_ascii_uppercase()),
            Mark::Step(n) => format!("{:>2} ", n % 100),
            Mark::Start => " @ ".to_string(),
            Mark::Goal => " X ".to_string(),
        }
    }

    fn is_trail(self) -> bool {
        matches!(self, Mark::Step(_) | Mark::Start | Mark::Goal)
    }
}

const fn terrain_color(terrain: Terrain) -> Color {
    match terrain {
        Terrain::Stone => Color::DarkGrey,
        Terrain::Water => Color::Blue,
        Terrain::Road => Color::Grey,
        Terrain::Grass => Color::DarkGreen,
        Terrain::Mud => Color::DarkYellow,
        Terrain::Dune => Color::Yellow,
    }
}

/// A map with fixed endpoints, drawn once per strategy.
pub struct View<'a> {
    pub grid: &'a Grid,
    pub start: Pos,
    pub goal: Pos,
    pub options: Options,
}

impl View<'_> {
    /// One-line outcome: steps, cost and number of expansions.
    pub fn summary(&self, kind: StrategyKind, search: &Search) -> Result<String, MapError> {
        let expanded = search.expansions.len();
        Ok(match &search.path {
            Some(path) => format!(
                "{kind}: {} steps, cost {}, {expanded} expansions",
                path.steps(),
                path.cost(self.grid)?
            ),
            None => format!("{kind}: no path, {expanded} expansions"),
        })
    }

    fn marks(&self, search: &Search) -> Vec<Mark> {
        let mut marks = vec![Mark::Bare; self.grid.len()];
        let mut set = |pos: Pos, mark: Mark| {
            if let Some(i) = self.grid.index_of(pos) {
                marks[i] = mark;
            }
        };
        if self.options.explored {
            for e in &search.expansions {
                set(e.pos, Mark::Explored);
            }
        }
        if let Some(path) = &search.path {
            for (n, &pos) in path.iter().enumerate() {
                set(pos, Mark::Step(n));
            }
        }
        set(self.start, Mark::Start);
        set(self.goal, Mark::Goal);
        marks
    }

    /// Write the summary line followed by the map with the trail numbered by
    /// step.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        kind: StrategyKind,
        search: &Search,
    ) -> Result<(), Box<dyn Error>> {
        let line = self.summary(kind, search)?;
        queue!(out, Print(line), Print("\n"))?;

        let marks = self.marks(search);
        let last_col = self.grid.cols() - 1;
        for (cell, &mark) in self.grid.iter().zip(&marks) {
            let text = mark.label(cell.terrain());
            if self.options.color {
                queue!(out, SetBackgroundColor(terrain_color(cell.terrain())))?;
                if mark.is_trail() {
                    queue!(
                        out,
                        SetForegroundColor(Color::Red),
                        SetAttribute(Attribute::Bold)
                    )?;
                } else {
                    queue!(out, SetForegroundColor(Color::Black))?;
                }
                queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
            } else {
                queue!(out, Print(text))?;
            }
            if cell.pos().col == last_col {
                queue!(out, Print("\n"))?;
            }
        }
        queue!(out, Print("\n"))?;
        out.flush()?;
        Ok(())
    }
}
