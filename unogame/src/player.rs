use crate::card::{Card, PlayedCard};
use crate::deck::Deck;

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    /// Draws up to `count` cards, stopping quietly when the deck is empty.
    /// Returns how many cards were actually drawn.
    pub fn draw_cards(&mut self, deck: &mut Deck, count: usize) -> usize {
        let cards = deck.draw_cards(count);
        let drawn = cards.len();
        self.hand.extend(cards);
        drawn
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    /// Indices into the hand of every card that can be played on `top`.
    pub fn legal_moves(&self, top: &PlayedCard) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(top))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, ColoredCard};

    #[test]
    fn legal_moves_follow_hand_order() {
        let mut player = Player::new("Player 1");
        player.hand = vec![
            Card::Colored(CardColor::Blue, ColoredCard::Number(2)),
            Card::Colored(CardColor::Red, ColoredCard::Number(9)),
            Card::DrawFour,
            Card::Colored(CardColor::Green, ColoredCard::Number(4)),
            Card::Colored(CardColor::Yellow, ColoredCard::Number(2)),
        ];
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(2));

        assert_eq!(player.legal_moves(&top), vec![0, 1, 2, 4]);
    }

    #[test]
    fn no_legal_moves_when_nothing_matches() {
        let mut player = Player::new("Player 1");
        player.hand = vec![Card::Colored(CardColor::Blue, ColoredCard::Skip)];
        let top = PlayedCard::Wild(CardColor::Red);

        assert!(player.legal_moves(&top).is_empty());
    }

    #[test]
    fn draw_cards_stops_when_deck_is_empty() {
        let mut deck = Deck::stacked(vec![Card::Wild, Card::DrawFour]);
        let mut player = Player::new("Player 1");

        assert_eq!(player.draw_cards(&mut deck, 5), 2);
        assert_eq!(player.hand(), &[Card::Wild, Card::DrawFour]);
        assert_eq!(player.draw_cards(&mut deck, 1), 0);
        assert_eq!(player.cards_count(), 2);
    }

    #[test]
    fn has_won_once_hand_is_empty() {
        let mut player = Player::new("Player 1");
        assert!(player.has_won());

        player.add_card(Card::Wild);
        assert!(!player.has_won());

        assert_eq!(player.remove_card(0), Card::Wild);
        assert!(player.has_won());
    }
}
