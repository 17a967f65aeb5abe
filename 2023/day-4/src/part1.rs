use miette::*;

use crate::card::parse_cards;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let cards = parse_cards(input)?;

    let total = cards.iter().try_fold(0u64, |total, card| {
        total
            .checked_add(card.points()?)
            .ok_or_else(|| miette!("Point total overflows at card {}", card.id))
    })?;

    Ok(total.to_string())
}
