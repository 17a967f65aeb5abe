use chumsky::prelude::*;
use glam::IVec2;
use itertools::Itertools;
use miette::*;

/// A single cell of the contraption.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    /// `.`
    Empty,
    /// `/`
    ForwardMirror,
    /// `\`
    BackwardMirror,
    /// `|`
    VerticalSplitter,
    /// `-`
    HorizontalSplitter,
}

/// Row-major grid of tiles. Positions use `x` for the column and `y` for the row.
#[derive(Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Parses the contraption layout, rejecting unknown symbols and ragged rows.
    pub fn parse(input: &str) -> Result<Self> {
        let rows = parser()
            .parse(input.trim_end())
            .into_result()
            .map_err(|errors| miette!("Parse failed: {}", errors.iter().join("; ")))?;

        Self::from_rows(rows)
    }

    fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);

        if let Some((y, row)) = rows.iter().find_position(|row| row.len() != width) {
            bail!(
                "Ragged grid: row {} has {} tiles, expected {}",
                y,
                row.len(),
                width
            );
        }

        Ok(Grid {
            width: i32::try_from(width).into_diagnostic()?,
            height: i32::try_from(rows.len()).into_diagnostic()?,
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: IVec2) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Returns the tile at `position`, or `None` when it lies outside the grid.
    pub fn get(&self, position: IVec2) -> Option<Tile> {
        self.contains(position)
            .then(|| self.tiles[(position.y * self.width + position.x) as usize])
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<Tile>>, extra::Err<Rich<'a, char>>> {
    let tile = choice((
        just('.').to(Tile::Empty),
        just('/').to(Tile::ForwardMirror),
        just('\\').to(Tile::BackwardMirror),
        just('|').to(Tile::VerticalSplitter),
        just('-').to(Tile::HorizontalSplitter),
    ));

    tile.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .at_least(1)
        .collect()
}
