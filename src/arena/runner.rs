use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, Move, Player, Result};
use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::rules::{apply_move, random_move, GameResult};

/// Arena configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: u32,

    /// Side played by the search. The other side moves at random.
    pub ai_player: Player,

    /// Search settings for the AI. Its seed is replaced per game.
    pub search: MCTSConfig,

    /// Seed for the random opponent and the per-game search seeds.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            ai_player: Player::Two,
            search: MCTSConfig::interactive(),
            seed: 7,
        }
    }
}

impl ArenaConfig {
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    pub fn with_search(mut self, search: MCTSConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub moves: u8,
}

/// Tally over an arena run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaReport {
    pub games: u32,
    pub ai_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl ArenaReport {
    /// Count one finished game.
    pub fn record(&mut self, result: GameResult, ai_player: Player) {
        self.games += 1;
        match result {
            GameResult::Winner(p) if p == ai_player => self.ai_wins += 1,
            GameResult::Winner(_) => self.opponent_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Fraction of games won by the search.
    #[must_use]
    pub fn ai_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.ai_wins as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "games: {}, ai wins: {}, opponent wins: {}, draws: {} ({:.1}% ai)",
            self.games,
            self.ai_wins,
            self.opponent_wins,
            self.draws,
            self.ai_win_rate() * 100.0
        )
    }
}

/// Play one game: `search` moves for `ai_player`, `rng` picks the other side's moves.
pub fn play_game(search: &mut MCTSSearch, ai_player: Player, rng: &mut GameRng) -> Result<GameRecord> {
    let mut state = GameState::new();

    while !state.completed {
        let mv = if state.active_player == ai_player {
            search.select_move(&state, ai_player)?
        } else {
            match random_move(&state, rng) {
                Some(mv) => mv,
                None => break,
            }
        };
        apply_move(&mut state, mv)?;
    }

    let result = state.result().unwrap_or(GameResult::Draw);
    Ok(GameRecord {
        result,
        moves: state.total_moves,
    })
}

/// Play `config.games` games and tally the results.
pub fn run_arena(config: &ArenaConfig) -> Result<ArenaReport> {
    let mut rng = GameRng::new(config.seed);
    let mut report = ArenaReport::default();

    for game in 0..config.games {
        let search_seed = rng.fork().seed();
        let mut search = MCTSSearch::new(config.search.clone().with_seed(search_seed));

        let record = play_game(&mut search, config.ai_player, &mut rng)?;
        report.record(record.result, config.ai_player);

        log::info!(
            "game {}/{}: {:?} after {} moves",
            game + 1,
            config.games,
            record.result,
            record.moves
        );
    }

    Ok(report)
}

/// Search against itself from the starting position.
///
/// `observer` sees the state after every move together with the move played.
pub fn self_play(
    config: &MCTSConfig,
    mut observer: impl FnMut(&GameState, Move),
) -> Result<GameResult> {
    let mut search = MCTSSearch::new(config.clone());
    let mut state = GameState::new();

    while !state.completed {
        let player = state.active_player;
        let mv = search.select_move(&state, player)?;
        apply_move(&mut state, mv)?;
        observer(&state, mv);
    }

    Ok(state.result().unwrap_or(GameResult::Draw))
}
