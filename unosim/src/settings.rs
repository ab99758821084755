use std::{env::var, str::FromStr};

use color_eyre::{eyre::eyre, Result};
use strum_macros::{Display, EnumString};
use unogame::{
    config::{MatchConfig, MatchMode},
    constants::DeckPreset,
};

#[derive(Clone, Copy, Debug, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BotKind {
    #[default]
    Random,
    FirstLegal,
}

const DEFAULT_MAX_ROUNDS: u32 = 100;

#[derive(Debug)]
pub struct Settings {
    pub players: Vec<String>,
    pub bot: BotKind,
    pub config: MatchConfig,
    /// Endless matches stop after this many rounds even without a winner.
    pub max_rounds: u32,
}

impl Settings {
    /// Reads `UNO_*` variables, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let players = match lookup("UNO_PLAYERS") {
            Some(names) => names
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            None => (1..=3).map(|i| format!("Player {i}")).collect(),
        };

        let mut config = MatchConfig::default();
        if let Some(mode) = parse_var::<MatchMode, _>(&lookup, "UNO_MODE")? {
            config = config.with_mode(mode);
        }
        if let Some(win_goal) = parse_var::<u32, _>(&lookup, "UNO_WIN_GOAL")? {
            config = config.with_win_goal(win_goal);
        }
        if let Some(hand_size) = parse_var::<usize, _>(&lookup, "UNO_HAND_SIZE")? {
            config = config.with_hand_size(hand_size);
        }
        if let Some(preset) = parse_var::<DeckPreset, _>(&lookup, "UNO_DECK")? {
            config = config.with_composition(preset.composition());
        }
        if let Some(seed) = parse_var::<u64, _>(&lookup, "UNO_SEED")? {
            config = config.with_seed(seed);
        }

        Ok(Settings {
            players,
            bot: parse_var::<BotKind, _>(&lookup, "UNO_BOT")?.unwrap_or_default(),
            config,
            max_rounds: parse_var::<u32, _>(&lookup, "UNO_MAX_ROUNDS")?.unwrap_or(DEFAULT_MAX_ROUNDS),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| eyre!("`{key}` has an invalid value: {value}")),
        None => Ok(None),
    }
}
