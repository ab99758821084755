//! An UNO-style card game engine: decks, hands, turn order, special cards and
//! multi-round matches. Whoever is playing plugs in through [`chooser`].

pub mod card;
pub mod chooser;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod match_play;
pub mod player;
pub mod round;
pub mod score;
pub mod turn;
