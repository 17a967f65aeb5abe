use miette::*;
use rayon::prelude::*;

use crate::beam::{edge_starts, energize, Beam};
use crate::grid::Grid;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let starts: Vec<Beam> = edge_starts(&grid).collect();

    // Every start is simulated from scratch; runs share nothing but the grid.
    let (best, start) = starts
        .into_par_iter()
        .map(|beam| energize(&grid, beam.position, beam.heading).map(|count| (count, beam)))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .max_by_key(|&(count, _)| count)
        .ok_or(miette!("Grid has no boundary to enter from"))?;

    tracing::info!(best, ?start, "best entry point");

    Ok(best.to_string())
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
        assert_eq!("51", process(input)?);
        Ok(())
    }

    #[test]
    fn single_cell() -> Result<()> {
        assert_eq!("1", process("/")?);
        Ok(())
    }
}
