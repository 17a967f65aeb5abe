use std::collections::HashMap;

use itertools::Itertools;
use miette::*;

use crate::card::parse_cards;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut cards = parse_cards(input)?;
    cards.sort_by_key(|card| card.id);

    if let Some((card, _)) = cards.iter().tuple_windows().find(|(a, b)| a.id == b.id) {
        bail!("Duplicate card id {}", card.id);
    }

    // Every card starts with its original instance. Copies only ever flow to
    // higher ids, so a card's count is final once the loop reaches it.
    let mut instances: HashMap<u32, u64> = cards.iter().map(|card| (card.id, 1)).collect();

    for card in &cards {
        let copies = instances[&card.id];
        let matches = u32::try_from(card.matches()).into_diagnostic()?;

        for id in (1..=matches).filter_map(|offset| card.id.checked_add(offset)) {
            // Copies of cards past the end of the table are dropped.
            if let Some(count) = instances.get_mut(&id) {
                *count = count
                    .checked_add(copies)
                    .ok_or_else(|| miette!("Copies of card {} overflow", id))?;
            }
        }
    }

    let total = instances
        .values()
        .try_fold(0u64, |total, &count| total.checked_add(count))
        .ok_or(miette!("Total card count overflows"))?;

    Ok(total.to_string())
}
