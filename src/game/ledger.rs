/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Player ledger.
//!
//! Maps player names to shared [`Player`] handles. The ledger itself holds
//! no lock over the whole table: lookups and inserts go through a
//! [`DashMap`], and per-player state carries its own atomicity.

use super::bet::Bet;
use super::error::BetRejection;
use super::player::Player;
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrent registry of every player at the table.
#[derive(Debug, Default)]
pub struct PlayerLedger {
    players: DashMap<String, Arc<Player>>,
}

impl PlayerLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player, replacing any earlier player with the same name.
    ///
    /// Returns `true` if the name was new.
    pub fn insert(&self, player: Player) -> bool {
        self.players
            .insert(player.name().to_string(), Arc::new(player))
            .is_none()
    }

    /// Looks up a player by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Player>> {
        self.players.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns `true` if a player with this name exists.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    /// Number of players.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if there are no players.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns every player, sorted by name.
    #[must_use]
    pub fn players(&self) -> Vec<Arc<Player>> {
        let mut players: Vec<_> = self
            .players
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        players.sort_by(|a, b| a.name().cmp(b.name()));
        players
    }

    /// Records `bet` in its player's history.
    ///
    /// # Errors
    ///
    /// [`BetRejection::UnknownPlayer`] if the player is not in the ledger,
    /// [`BetRejection::DuplicateBet`] if the round already holds a bet.
    pub fn record_bet(&self, bet: Bet) -> Result<(), BetRejection> {
        let player = self
            .get(&bet.player)
            .ok_or_else(|| BetRejection::UnknownPlayer {
                player: bet.player.clone(),
            })?;
        player.record_bet(bet)
    }
}

impl FromIterator<Player> for PlayerLedger {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        let ledger = Self::new();
        for player in iter {
            ledger.insert(player);
        }
        ledger
    }
}
