use chumsky::prelude::*;
use itertools::{iproduct, Itertools};
use miette::*;

#[derive(Debug, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: Vec<u32>,
    pub scratched: Vec<u32>,
}

impl Card {
    /// Number of (scratched, winning) pairs holding the same number.
    pub fn matches(&self) -> usize {
        iproduct!(&self.scratched, &self.winning)
            .filter(|(scratched, winning)| scratched == winning)
            .count()
    }

    /// One point for the first match, doubled for every match after it.
    pub fn points(&self) -> Result<u64> {
        match self.matches() {
            0 => Ok(0),
            matches => u32::try_from(matches - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .ok_or_else(|| {
                    miette!("Card {} scores too many points: {} matches", self.id, matches)
                }),
        }
    }
}

/// Parses one `Card N: winning... | scratched...` line per card.
pub fn parse_cards(input: &str) -> Result<Vec<Card>> {
    parser()
        .parse(input.trim_end())
        .into_result()
        .map_err(|errors| miette!("Parse failed: {}", errors.iter().join("; ")))
}

fn number<'a>() -> impl Parser<'a, &'a str, u32, extra::Err<Rich<'a, char>>> {
    text::int(10).try_map(|digits: &str, span| {
        digits
            .parse::<u32>()
            .map_err(|error| Rich::custom(span, format!("{digits}: {error}")))
    })
}

fn numbers<'a>() -> impl Parser<'a, &'a str, Vec<u32>, extra::Err<Rich<'a, char>>> {
    number()
        .then_ignore(text::inline_whitespace())
        .repeated()
        .collect()
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Card>, extra::Err<Rich<'a, char>>> {
    let card = just("Card")
        .ignore_then(text::inline_whitespace().at_least(1))
        .ignore_then(number())
        .then_ignore(just(':'))
        .then_ignore(text::inline_whitespace())
        .then(numbers())
        .then_ignore(just('|'))
        .then_ignore(text::inline_whitespace())
        .then(numbers())
        .map(|((id, winning), scratched)| Card {
            id,
            winning,
            scratched,
        });

    card.separated_by(text::newline()).at_least(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn parses_card() -> Result<()> {
        let cards = parse_cards("Card   3:  1 21 53 | 69  1\n")?;
        assert_eq!(
            vec![Card {
                id: 3,
                winning: vec![1, 21, 53],
                scratched: vec![69, 1],
            }],
            cards
        );
        Ok(())
    }

    #[rstest]
    #[case("Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53", 4, 8)]
    #[case("Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19", 2, 2)]
    #[case("Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1", 2, 2)]
    #[case("Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83", 1, 1)]
    #[case("Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36", 0, 0)]
    #[case("Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11", 0, 0)]
    fn scores(#[case] line: &str, #[case] matches: usize, #[case] points: u64) -> Result<()> {
        let cards = parse_cards(line)?;
        assert_eq!(matches, cards[0].matches());
        assert_eq!(points, cards[0].points()?);
        Ok(())
    }

    #[rstest]
    #[case(64, Some(1 << 63))]
    #[case(65, None)]
    fn points_overflow_is_an_error(
        #[case] count: u32,
        #[case] expected: Option<u64>,
    ) -> Result<()> {
        let numbers = (1..=count).join(" ");
        let cards = parse_cards(&format!("Card 1: {numbers} | {numbers}"))?;
        assert_eq!(count as usize, cards[0].matches());
        assert_eq!(expected, cards[0].points().ok());
        Ok(())
    }

    #[rstest]
    #[case("Card 1: 41 48 83 86 17 83 86 6 31 17")]
    #[case("Card 1 41 48 | 83 86")]
    #[case("Card one: 41 48 | 83 86")]
    #[case("Card 1: 41 x8 | 83 86")]
    #[case("Card 1: 99999999999 | 83 86")]
    #[case("")]
    fn rejects_malformed(#[case] input: &str) {
        assert!(parse_cards(input).is_err());
    }
}
