use glam::IVec2;
use miette::*;

use crate::beam::{energize, Direction};
use crate::grid::Grid;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;

    // The beam enters the top-left cell travelling right.
    let energized = energize(&grid, IVec2::new(-1, 0), Direction::Right)?;

    Ok(energized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";
        assert_eq!("46", process(input)?);
        Ok(())
    }
}
