//! Named players and the pair that plays a session.

use super::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named player holding one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{name}")]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// Reasons a roster cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RosterError {
    /// A player has a blank name.
    #[display("Player holding {} has an empty name", _0)]
    EmptyName(Symbol),

    /// Both players hold the same symbol.
    #[display("Both players hold {}", _0)]
    SameSymbol(Symbol),
}

impl std::error::Error for RosterError {}

/// The two players of a session.
///
/// Names are non-empty and the symbols differ. `first` moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    first: Player,
    second: Player,
}

impl Roster {
    /// Builds the usual roster: `first_name` plays X, `second_name` plays O.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] if either name is blank.
    #[instrument(skip(first_name, second_name))]
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
    ) -> Result<Self, RosterError> {
        Self::from_players(
            Player::new(first_name, Symbol::X),
            Player::new(second_name, Symbol::O),
        )
    }

    /// Builds a roster from two players; `first` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] for a blank name and
    /// [`RosterError::SameSymbol`] if both players hold the same symbol.
    #[instrument(skip(first, second), fields(first = %first.name, second = %second.name))]
    pub fn from_players(first: Player, second: Player) -> Result<Self, RosterError> {
        for player in [&first, &second] {
            if player.name.trim().is_empty() {
                return Err(RosterError::EmptyName(player.symbol));
            }
        }
        if first.symbol == second.symbol {
            return Err(RosterError::SameSymbol(first.symbol));
        }
        Ok(Self { first, second })
    }

    /// The player who opens every session.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// The player who moves second.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// The player holding `symbol`.
    pub fn by_symbol(&self, symbol: Symbol) -> &Player {
        if self.first.symbol == symbol {
            &self.first
        } else {
            &self.second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Ada", Symbol::O);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.symbol(), Symbol::O);
        assert_eq!(player.to_string(), "Ada");
    }

    #[test]
    fn test_default_symbols() {
        let roster = Roster::new("player1", "player2").unwrap();
        assert_eq!(roster.first().symbol(), Symbol::X);
        assert_eq!(roster.second().symbol(), Symbol::O);
        assert_eq!(roster.by_symbol(Symbol::O).name(), "player2");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Roster::new("player1", "  "),
            Err(RosterError::EmptyName(Symbol::O))
        );
        assert_eq!(
            Roster::new("", "player2"),
            Err(RosterError::EmptyName(Symbol::X))
        );
    }

    #[test]
    fn test_same_symbol_rejected() {
        let result = Roster::from_players(Player::new("a", Symbol::X), Player::new("b", Symbol::X));
        assert_eq!(result, Err(RosterError::SameSymbol(Symbol::X)));
    }

    #[test]
    fn test_o_may_open() {
        let roster =
            Roster::from_players(Player::new("a", Symbol::O), Player::new("b", Symbol::X)).unwrap();
        assert_eq!(roster.first().symbol(), Symbol::O);
        assert_eq!(roster.by_symbol(Symbol::X).name(), "b");
    }
}
