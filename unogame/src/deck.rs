use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::trace;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::DeckComposition,
    error::Result,
};

/// The draw pile. The last element is the top of the pile.
///
/// Played cards are never shuffled back in, so once the pile is empty every
/// draw comes back empty-handed.
#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds every card of `composition` and shuffles them.
    pub fn build<R: Rng + ?Sized>(composition: &DeckComposition, rng: &mut R) -> Result<Self> {
        let mut deck = Self::unshuffled(composition)?;
        deck.shuffle(rng);
        Ok(deck)
    }

    fn unshuffled(composition: &DeckComposition) -> Result<Self> {
        composition.validate()?;
        let mut cards = Vec::with_capacity(composition.total());

        // Colored Cards
        for color in CardColor::iter() {
            for _ in 0..composition.skip_cards_per_color {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            for _ in 0..composition.reverse_cards_per_color {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            for _ in 0..composition.draw_two_cards_per_color {
                cards.push(Card::Colored(color, ColoredCard::DrawTwo));
            }

            for number in composition.number_cards_per_color {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }
        }

        for _ in 0..composition.wild_cards {
            cards.push(Card::Wild);
        }

        for _ in 0..composition.draw_four_cards {
            cards.push(Card::DrawFour);
        }

        Ok(Self(cards))
    }

    /// A deck that deals `cards` in the given order, first element first.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self(cards)
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        let card = self.0.pop();
        if card.is_none() {
            trace!("draw from an empty deck");
        }
        card
    }

    /// Draws up to `count` cards, fewer if the deck runs out.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let start = self.0.len().saturating_sub(count);
        let mut cards = self.0.split_off(start);
        cards.reverse();
        cards
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}
