pub mod card;
pub mod part1;
pub mod part2;
