//! # Scatter Module
//!
//! Places the numbered targets inside the play area and answers "which target
//! is under this cell?" for mouse clicks.
//!
//! Coordinates are terminal cells relative to the top-left corner of the play
//! area's interior. A target occupies a `TARGET_WIDTH` x `TARGET_HEIGHT` box
//! and is always placed fully inside the area.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Columns taken by one target button
pub const TARGET_WIDTH: u16 = 6;
/// Rows taken by one target button
pub const TARGET_HEIGHT: u16 = 3;

/// Size of the area targets are scattered over, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayArea {
    pub width: u16,
    pub height: u16,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: 60,
            height: 15,
        }
    }
}

impl PlayArea {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn fits_target(&self) -> bool {
        self.width >= TARGET_WIDTH && self.height >= TARGET_HEIGHT
    }

    /// Largest x a target may start at
    pub fn max_x(&self) -> u16 {
        self.width.saturating_sub(TARGET_WIDTH)
    }

    /// Largest y a target may start at
    pub fn max_y(&self) -> u16 {
        self.height.saturating_sub(TARGET_HEIGHT)
    }
}

/// Top-left cell of a target inside the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// True if the cell `(col, row)` falls on the target placed here
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && col < self.x.saturating_add(TARGET_WIDTH)
            && row >= self.y
            && row < self.y.saturating_add(TARGET_HEIGHT)
    }

    pub fn fits_in(&self, area: PlayArea) -> bool {
        self.x <= area.max_x() && self.y <= area.max_y()
    }
}

/// When target positions are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Chosen once when the game starts
    #[default]
    Fixed,
    /// Chosen again on every frame, so the targets jump around
    Jitter,
}

/// Picks an independent uniform position for each of `count` targets
pub fn scatter<R: Rng + ?Sized>(count: usize, area: PlayArea, rng: &mut R) -> Vec<Position> {
    (0..count)
        .map(|_| {
            Position::new(
                rng.random_range(0..=area.max_x()),
                rng.random_range(0..=area.max_y()),
            )
        })
        .collect()
}

/// Order targets are drawn in, bottom first
///
/// The first `cleared` targets go underneath, then the rest from the highest
/// number down, so the lowest uncleared number is always on top and never
/// hidden.
pub fn draw_order(count: usize, cleared: usize) -> impl Iterator<Item = usize> {
    let cleared = cleared.min(count);
    (0..cleared).chain((cleared..count).rev())
}

/// Index of the clickable target under `(col, row)`
///
/// Cleared targets (the first `cleared` indices) are disabled and skipped;
/// among the rest the lowest number is the one drawn on top.
pub fn target_at(positions: &[Position], cleared: usize, col: u16, row: u16) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .skip(cleared)
        .find(|(_, pos)| pos.contains(col, row))
        .map(|(index, _)| index)
}

/// Owns the random source and the current placement
#[derive(Debug, Clone)]
pub struct Scatterer {
    rng: Xoshiro256PlusPlus,
    area: PlayArea,
    mode: LayoutMode,
    positions: Vec<Position>,
}

impl Scatterer {
    pub fn new(area: PlayArea, mode: LayoutMode, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            area,
            mode,
            positions: Vec::new(),
        }
    }

    pub fn area(&self) -> PlayArea {
        self.area
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Positions as last drawn; index `i` belongs to number `i + 1`
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Places `count` targets for a new game
    pub fn place(&mut self, count: usize) {
        self.positions = scatter(count, self.area, &mut self.rng);
    }

    /// Called once per frame before drawing
    pub fn refresh(&mut self) {
        if self.mode == LayoutMode::Jitter && !self.positions.is_empty() {
            let count = self.positions.len();
            self.place(count);
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn target_at(&self, cleared: usize, col: u16, row: u16) -> Option<usize> {
        target_at(&self.positions, cleared, col, row)
    }
}
