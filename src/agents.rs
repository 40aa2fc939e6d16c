//! Differing kinds of agents that can pick cups to sow
use crate::algorithms::{MinimaxSearch, Weights};
use crate::boards::Board;
use crate::mancala_errors::*;
use crate::moves::{distance, free_moves, gen_moves, is_store, natural_row, sow_cups};
use crate::seats::Seat;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt::{self, Display};
use std::io::{stdout, Write};
use std::str::FromStr;
use text_io::try_read;

/// An agent is an object that can play mancala by choosing a cup appropriate to
/// the current board.
pub trait Agent {
    /// Label of the cup `seat` wants to sow. `None` only when the agent has
    /// nothing to offer.
    fn play_move(&mut self, board: &Board, seat: Seat) -> Option<String>;

    fn kind(&self) -> AgentKind;
}

fn label(board: &Board, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| board.cup_label(i))
        .map(|l| l.to_string())
}

// ---------------------------------------------
// Shared move pickers
// ---------------------------------------------

/// Any non-empty cup, uniformly.
pub fn random_move<R: Rng + ?Sized>(cups: &[u32], rng: &mut R) -> Option<usize> {
    gen_moves(cups).choose(rng).map(|m| m.index)
}

/// The free move that spends the fewest seeds.
pub fn cheapest_free_move(cups: &[u32], seat: Seat) -> Option<usize> {
    free_moves(cups, seat)
        .into_iter()
        .min_by_key(|m| m.seeds)
        .map(|m| m.index)
}

/// A cup whose last seed drops onto one of the opponent's free-move cups,
/// which throws that cup's count off. Bigger threats are answered first.
pub fn spoiling_move(cups: &[u32], seat: Seat) -> Option<usize> {
    let total = cups.len();
    let mut threats = free_moves(cups, seat.opposite());
    threats.sort_by(|a, b| b.seeds.cmp(&a.seeds));

    for threat in threats {
        // Walk backward from the threatened cup
        for back in 1..total {
            let source = (threat.index + total - back) % total;
            if is_store(total, source) || cups[source] == 0 {
                continue;
            }
            if cups[source] as usize % total == distance(source, threat.index, total) {
                return Some(source);
            }
        }
    }
    None
}

const NATURAL_ROW_BONUS: f64 = 0.5;

/// Free moves a sow opens up for `seat`, minus the ones it opens up for the
/// opponent, plus a little for playing from the seat's own row.
pub fn move_score(cups: &[u32], seat: Seat, index: usize) -> f64 {
    let mut scratch = cups.to_vec();
    sow_cups(&mut scratch, index);
    let own = free_moves(&scratch, seat).len() as f64;
    let theirs = free_moves(&scratch, seat.opposite()).len() as f64;
    let bonus = if natural_row(cups.len(), seat).contains(&index) {
        NATURAL_ROW_BONUS
    } else {
        0.0
    };
    own - theirs + bonus
}

/// Every cup sharing the highest [`move_score`].
pub fn best_scored_moves(cups: &[u32], seat: Seat) -> Vec<usize> {
    let mut best_score = f64::NEG_INFINITY;
    let mut best = Vec::new();
    for mv in gen_moves(cups) {
        let score = move_score(cups, seat, mv.index);
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(mv.index);
        } else if score == best_score {
            best.push(mv.index);
        }
    }
    best
}

pub fn scored_move<R: Rng + ?Sized>(cups: &[u32], seat: Seat, rng: &mut R) -> Option<usize> {
    best_scored_moves(cups, seat).choose(rng).copied()
}

// ---------------------------------------------
// Agents
// ---------------------------------------------

/// Where a human's cup choice comes from.
pub trait InputCollector {
    fn read_cup(&mut self, board: &Board, seat: Seat) -> Option<String>;
}

pub struct StdinCollector {}

impl InputCollector for StdinCollector {
    fn read_cup(&mut self, board: &Board, seat: Seat) -> Option<String> {
        println!("{}\n", board);
        println!("{}'s turn", seat);
        print!("Enter cup to sow: ");
        stdout().flush().ok()?;
        let cup: Result<String, _> = try_read!();
        cup.ok()
    }
}

pub struct HumanAgent {
    input: Box<dyn InputCollector>,
}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent::with_input(Box::new(StdinCollector {}))
    }

    pub fn with_input(input: Box<dyn InputCollector>) -> Self {
        HumanAgent { input: input }
    }
}

impl Agent for HumanAgent {
    fn play_move(&mut self, board: &Board, seat: Seat) -> Option<String> {
        // The board validates whatever comes back
        self.input.read_cup(board, seat).map(|c| c.trim().to_string())
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
}

pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        RandomAgent { rng: rng }
    }
}

impl Agent for RandomAgent {
    fn play_move(&mut self, board: &Board, _seat: Seat) -> Option<String> {
        label(board, random_move(board.cups(), &mut self.rng))
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }
}

/// Takes the cheapest free move if there is one, plays randomly otherwise.
pub struct ImprovedRandomAgent {
    rng: SmallRng,
}

impl ImprovedRandomAgent {
    pub fn new() -> Self {
        ImprovedRandomAgent::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        ImprovedRandomAgent { rng: rng }
    }
}

impl Agent for ImprovedRandomAgent {
    fn play_move(&mut self, board: &Board, seat: Seat) -> Option<String> {
        let cups = board.cups();
        let index = cheapest_free_move(cups, seat).or_else(|| random_move(cups, &mut self.rng));
        label(board, index)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::ImprovedRandom
    }
}

/// Free move first, then spoil the opponent's free moves, then the best
/// scoring sow.
pub struct DefensiveAgent {
    rng: SmallRng,
}

impl DefensiveAgent {
    pub fn new() -> Self {
        DefensiveAgent::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        DefensiveAgent { rng: rng }
    }
}

impl Agent for DefensiveAgent {
    fn play_move(&mut self, board: &Board, seat: Seat) -> Option<String> {
        let cups = board.cups();
        let index = cheapest_free_move(cups, seat)
            .or_else(|| spoiling_move(cups, seat))
            .or_else(|| scored_move(cups, seat, &mut self.rng));
        label(board, index)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Defensive
    }
}

pub struct MinimaxAgent {
    weights: Weights,
    depth: u16,
    rng: SmallRng,
}

impl MinimaxAgent {
    pub fn new(depth: u16) -> Self {
        MinimaxAgent::with_rng(Weights::default(), depth, SmallRng::from_entropy())
    }

    pub fn with_rng(weights: Weights, depth: u16, rng: SmallRng) -> Self {
        MinimaxAgent {
            weights: weights,
            depth: depth,
            rng: rng,
        }
    }
}

impl Agent for MinimaxAgent {
    fn play_move(&mut self, board: &Board, seat: Seat) -> Option<String> {
        let index = self.weights.minimax(board, seat, self.depth, &mut self.rng);
        label(board, index)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Minimax
    }
}

/// Holds back the inner agent's answer for a while, so a watching human can
/// follow the game.
pub struct SlowAgent {
    inner: Box<dyn Agent>,
    response_time_millis: u64,
}

impl SlowAgent {
    pub fn new(agent: Box<dyn Agent>, response_time_millis: u64) -> Self {
        SlowAgent {
            inner: agent,
            response_time_millis: response_time_millis,
        }
    }
}

impl Agent for SlowAgent {
    fn play_move(&mut self, board: &Board, seat: Seat) -> Option<String> {
        std::thread::sleep(std::time::Duration::from_millis(self.response_time_millis));
        self.inner.play_move(board, seat)
    }

    fn kind(&self) -> AgentKind {
        self.inner.kind()
    }
}

// ---------------------------------------------
// Factory
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Random,
    ImprovedRandom,
    Defensive,
    Minimax,
}

impl AgentKind {
    pub fn all() -> [AgentKind; 5] {
        use AgentKind::*;
        [Human, Random, ImprovedRandom, Defensive, Minimax]
    }

    /// Builds a fresh agent of this kind. `depth` only matters for minimax.
    pub fn create(&self, depth: u16) -> Box<dyn Agent> {
        match self {
            AgentKind::Human => Box::new(HumanAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::new()),
            AgentKind::ImprovedRandom => Box::new(ImprovedRandomAgent::new()),
            AgentKind::Defensive => Box::new(DefensiveAgent::new()),
            AgentKind::Minimax => Box::new(MinimaxAgent::new(depth)),
        }
    }

    /// Same as [`AgentKind::create`] but with a fixed random seed.
    pub fn create_seeded(&self, seed: u64, depth: u16) -> Box<dyn Agent> {
        let rng = SmallRng::seed_from_u64(seed);
        match self {
            AgentKind::Human => Box::new(HumanAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::with_rng(rng)),
            AgentKind::ImprovedRandom => Box::new(ImprovedRandomAgent::with_rng(rng)),
            AgentKind::Defensive => Box::new(DefensiveAgent::with_rng(rng)),
            AgentKind::Minimax => Box::new(MinimaxAgent::with_rng(Weights::default(), depth, rng)),
        }
    }
}

impl Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Human => "human",
            AgentKind::Random => "random",
            AgentKind::ImprovedRandom => "improved-random",
            AgentKind::Defensive => "defensive",
            AgentKind::Minimax => "minimax",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AgentKind {
    type Err = MancalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        AgentKind::all()
            .iter()
            .find(|k| k.to_string() == wanted)
            .copied()
            .ok_or_else(|| MancalaError::UnknownAgent(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::DEFAULT_DEPTH;
    use crate::utils::{board_with, seeded_rng};
    use std::collections::VecDeque;

    struct ScriptedInput(VecDeque<&'static str>);

    impl InputCollector for ScriptedInput {
        fn read_cup(&mut self, _board: &Board, _seat: Seat) -> Option<String> {
            self.0.pop_front().map(|s| s.to_string())
        }
    }

    #[test]
    fn test_human_passes_input_through() {
        let mut human = HumanAgent::with_input(Box::new(ScriptedInput(
            vec![" zz\n", "a"].into_iter().collect(),
        )));
        let board = Board::new(6).unwrap();
        assert_eq!(human.play_move(&board, Seat::PlayerOne), Some("zz".into()));
        assert_eq!(human.play_move(&board, Seat::PlayerOne), Some("a".into()));
        assert_eq!(human.play_move(&board, Seat::PlayerOne), None);
    }

    #[test]
    fn test_random_only_picks_filled_cups() {
        let board = board_with(6, &[("b", 3), ("k", 1)]);
        let mut agent = RandomAgent::with_rng(seeded_rng());
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let cup = agent.play_move(&board, Seat::PlayerOne).unwrap();
            assert!(cup == "b" || cup == "k");
            seen.insert(cup);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_random_no_moves() {
        let board = Board::new(3).unwrap();
        let mut agent = RandomAgent::with_rng(seeded_rng());
        assert_eq!(agent.play_move(&board, Seat::PlayerTwo), None);
    }

    #[test]
    fn test_improved_random_takes_free_move() {
        // g (index 13) with one seed is the only sow ending in store 0
        let board = board_with(6, &[("g", 1), ("a", 2), ("b", 2), ("j", 1)]);
        let mut agent = ImprovedRandomAgent::with_rng(seeded_rng());
        for _ in 0..1000 {
            assert_eq!(agent.play_move(&board, Seat::PlayerOne), Some("g".into()));
        }
    }

    #[test]
    fn test_improved_random_prefers_cheapest() {
        // g (13, one seed) and h (12, two seeds) both end in store 0
        let board = board_with(6, &[("g", 1), ("h", 2), ("c", 1)]);
        let mut agent = ImprovedRandomAgent::with_rng(seeded_rng());
        assert_eq!(agent.play_move(&board, Seat::PlayerOne), Some("g".into()));
        // For the other seat, c (3) ends on d: no free move, random fallback
        let cup = agent.play_move(&board, Seat::PlayerTwo).unwrap();
        assert!(["g", "h", "c"].contains(&cup.as_str()));
    }

    //       a   b   c   d   e   f
    //       0   3   3   0   1   1
    //   0                           0
    //       0   0   0   0   0   0
    //       g   h   i   j   k   l
    #[test]
    fn test_defensive_move1() {
        let board = board_with(6, &[("b", 3), ("c", 3), ("e", 1), ("f", 1)]);
        assert_eq!(spoiling_move(board.cups(), Seat::PlayerOne), Some(5));
        let mut agent = DefensiveAgent::with_rng(seeded_rng());
        assert_eq!(agent.play_move(&board, Seat::PlayerOne), Some("e".into()));
    }

    //       a   b   c   d   e   f
    //       0   2   4   3   1   1
    //   0                           0
    //       0   0   0   0   0   0
    //       g   h   i   j   k   l
    #[test]
    fn test_defensive_move2() {
        let board = board_with(6, &[("b", 2), ("c", 4), ("d", 3), ("e", 1), ("f", 1)]);
        let mut agent = DefensiveAgent::with_rng(seeded_rng());
        assert_eq!(agent.play_move(&board, Seat::PlayerOne), Some("b".into()));
    }

    #[test]
    fn test_defensive_prefers_own_free_move() {
        let board = board_with(6, &[("f", 1), ("e", 1), ("g", 1)]);
        let mut agent = DefensiveAgent::with_rng(seeded_rng());
        assert_eq!(agent.play_move(&board, Seat::PlayerOne), Some("g".into()));
    }

    //       a   b
    //       1   2
    //   0           0
    //       2   1
    //       c   d
    #[test]
    fn test_defensive_scoring_fallback() {
        let board = Board::from_cups(vec![0, 1, 2, 0, 1, 2]).unwrap();
        let cups = board.cups();
        assert!(free_moves(cups, Seat::PlayerOne).is_empty());
        assert!(free_moves(cups, Seat::PlayerTwo).is_empty());
        assert_eq!(spoiling_move(cups, Seat::PlayerOne), None);

        assert_eq!(move_score(cups, Seat::PlayerOne, 1), 0.0);
        assert_eq!(move_score(cups, Seat::PlayerOne, 2), 1.0);
        assert_eq!(move_score(cups, Seat::PlayerOne, 4), 0.5);
        assert_eq!(move_score(cups, Seat::PlayerOne, 5), -0.5);
        assert_eq!(best_scored_moves(cups, Seat::PlayerOne), vec![2]);

        let mut agent = DefensiveAgent::with_rng(seeded_rng());
        for _ in 0..50 {
            assert_eq!(agent.play_move(&board, Seat::PlayerOne), Some("b".into()));
        }
    }

    #[test]
    fn test_scored_move_breaks_ties_among_best() {
        // Every sow scores the same for Player 2 here
        let board = Board::from_cups(vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap();
        let best = best_scored_moves(board.cups(), Seat::PlayerTwo);
        let mut rng = seeded_rng();
        for _ in 0..100 {
            let mv = scored_move(board.cups(), Seat::PlayerTwo, &mut rng).unwrap();
            assert!(best.contains(&mv));
        }
    }

    #[test]
    fn test_minimax_agent() {
        let board = board_with(6, &[("f", 1), ("a", 2)]);
        let mut agent = MinimaxAgent::with_rng(Weights::default(), DEFAULT_DEPTH, seeded_rng());
        assert_eq!(agent.play_move(&board, Seat::PlayerTwo), Some("f".into()));
        assert_eq!(agent.kind(), AgentKind::Minimax);
    }

    #[test]
    fn test_slow_agent_delegates() {
        let board = board_with(6, &[("d", 2)]);
        let mut agent = SlowAgent::new(Box::new(RandomAgent::with_rng(seeded_rng())), 1);
        assert_eq!(agent.play_move(&board, Seat::PlayerOne), Some("d".into()));
        assert_eq!(agent.kind(), AgentKind::Random);
    }

    #[test]
    fn test_agent_kind_from_str() {
        for kind in AgentKind::all().iter() {
            assert_eq!(kind.to_string().parse::<AgentKind>(), Ok(*kind));
            assert_eq!(kind.create(DEFAULT_DEPTH).kind(), *kind);
            assert_eq!(kind.create_seeded(7, DEFAULT_DEPTH).kind(), *kind);
        }
        assert_eq!(
            "Improved_Random".parse::<AgentKind>(),
            Ok(AgentKind::ImprovedRandom)
        );
        assert_eq!(
            "alphazero".parse::<AgentKind>(),
            Err(MancalaError::UnknownAgent("alphazero".into()))
        );
    }
}
