//! Cards missing from each suit of a deck, or `GRESKA` on a duplicate card.

use std::collections::HashSet;

use crate::templates::prelude::*;

pub struct CardSet;

static INFO: TemplateInfo = TemplateInfo {
    id: "11507",
    title: "Card set",
    category: Category::Implementation,
    input: &[Field::word("cards")],
    output: &[Field::int("missing").repeat("4")],
    constraints: &[
        "cards is a concatenation of at most 1000 labels `Sxx`",
        "S is one of P K H T and xx is 01 to 13",
    ],
    samples: &[
        Sample {
            input: "P01K02H03H04\n",
            output: "12 12 11 13\n",
        },
        Sample {
            input: "H02H10P11H02\n",
            output: "GRESKA\n",
        },
    ],
};

const SUITS: [u8; 4] = [b'P', b'K', b'H', b'T'];
const PER_SUIT: usize = 13;

impl Template for CardSet {
    /// `(suit index, number)` per card.
    type Input = Vec<(usize, u8)>;
    type Output = Option<[usize; 4]>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<(usize, u8)>, InputError> {
        let cards = sc.token("cards")?.as_bytes();
        if cards.len() % 3 != 0 || cards.len() > 3000 {
            return Err(InputError::constraint("cards", "expected up to 1000 three-character labels"));
        }
        cards
            .chunks(3)
            .map(|label| {
                let suit = SUITS.iter().position(|&s| s == label[0]);
                let number = std::str::from_utf8(&label[1..])
                    .ok()
                    .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|d| d.parse::<u8>().ok())
                    .filter(|n| (1..=13).contains(n));
                match (suit, number) {
                    (Some(s), Some(n)) => Ok((s, n)),
                    _ => Err(InputError::constraint(
                        "cards",
                        format!("bad label {:?}", String::from_utf8_lossy(label)),
                    )),
                }
            })
            .collect()
    }

    fn solve(&self, cards: &Vec<(usize, u8)>) -> Option<[usize; 4]> {
        let mut seen = HashSet::new();
        let mut missing = [PER_SUIT; 4];
        for &card in cards {
            if !seen.insert(card) {
                return None;
            }
            missing[card.0] -= 1;
        }
        Some(missing)
    }

    fn render(&self, output: &Option<[usize; 4]>, out: &mut String) {
        match output {
            Some(missing) => push_line(out, missing),
            None => push_line(out, ["GRESKA"]),
        }
    }
}
