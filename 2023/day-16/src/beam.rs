use std::collections::{HashSet, VecDeque};

use glam::IVec2;
use miette::*;

use crate::grid::{Grid, Tile};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in grid coordinates, where rows grow downwards.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A ray segment sitting on `position`, about to step along `heading`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Beam {
    pub position: IVec2,
    pub heading: Direction,
}

impl Beam {
    pub fn new(position: IVec2, heading: Direction) -> Self {
        Self { position, heading }
    }

    fn advance(self) -> IVec2 {
        self.position + self.heading.offset()
    }
}

impl Tile {
    /// Headings leaving this tile for a beam that entered it travelling along `heading`.
    /// Splitters struck broadside produce a second heading.
    pub fn deflect(self, heading: Direction) -> (Direction, Option<Direction>) {
        use Direction::*;

        match (self, heading) {
            (Tile::ForwardMirror, Up) => (Right, None),
            (Tile::ForwardMirror, Down) => (Left, None),
            (Tile::ForwardMirror, Left) => (Down, None),
            (Tile::ForwardMirror, Right) => (Up, None),
            (Tile::BackwardMirror, Up) => (Left, None),
            (Tile::BackwardMirror, Down) => (Right, None),
            (Tile::BackwardMirror, Left) => (Up, None),
            (Tile::BackwardMirror, Right) => (Down, None),
            (Tile::VerticalSplitter, heading) if heading.is_horizontal() => (Up, Some(Down)),
            (Tile::HorizontalSplitter, heading) if !heading.is_horizontal() => {
                (Left, Some(Right))
            }
            _ => (heading, None),
        }
    }
}

/// Counts the cells lit by a beam that enters `grid` from `start`, a position one
/// step outside the boundary along `heading`.
#[tracing::instrument(skip(grid))]
pub fn energize(grid: &Grid, start: IVec2, heading: Direction) -> Result<usize> {
    let start = Beam::new(start, heading);
    if grid.contains(start.position) || !grid.contains(start.advance()) {
        bail!(
            "Beam at {} heading {:?} does not enter the grid from outside",
            start.position,
            start.heading
        );
    }

    // Keyed by the beam being expanded, not the cell it lands on: a cell may be
    // crossed in several directions.
    let mut visited: HashSet<Beam> = HashSet::new();
    let mut energized: HashSet<IVec2> = HashSet::new();
    let mut pending = VecDeque::from([start]);

    while let Some(beam) = pending.pop_front() {
        if !visited.insert(beam) {
            continue;
        }

        let next = beam.advance();
        let Some(tile) = grid.get(next) else {
            continue;
        };
        energized.insert(next);

        let (heading, split) = tile.deflect(beam.heading);
        pending.push_back(Beam::new(next, heading));
        if let Some(heading) = split {
            pending.push_back(Beam::new(next, heading));
        }
    }

    tracing::debug!(energized = energized.len(), "beam settled");
    Ok(energized.len())
}

/// Every boundary cell paired with the heading that points into the grid.
pub fn edge_starts(grid: &Grid) -> impl Iterator<Item = Beam> {
    let (width, height) = (grid.width(), grid.height());

    itertools::chain!(
        (0..height).map(|y| Beam::new(IVec2::new(-1, y), Direction::Right)),
        (0..height).map(move |y| Beam::new(IVec2::new(width, y), Direction::Left)),
        (0..width).map(|x| Beam::new(IVec2::new(x, -1), Direction::Down)),
        (0..width).map(move |x| Beam::new(IVec2::new(x, height), Direction::Up)),
    )
}
