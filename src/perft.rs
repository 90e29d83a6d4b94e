//! Perft: exhaustive move-tree enumeration.
//!
//! Perft walks every legal move sequence to a fixed depth, counting leaf
//! nodes and move categories along the way. Because the expected values
//! for many positions are well known, it doubles as the correctness
//! oracle for the move generator and the apply-move state machine, and as
//! a benchmark for both.

use std::fmt;

use serde::Serialize;

use crate::board::{Board, Color, FenError, Move};

/// Counters accumulated over one perft traversal.
///
/// `nodes` counts leaf positions at the requested depth. The category
/// counters count legal moves by their own attributes, `checks` counts
/// legal moves that put the opponent in check, and `checkmates` counts
/// interior positions with no legal move at all (checkmate or stalemate),
/// once per terminal position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PerftResults {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftResults {
    fn merge(&mut self, other: &PerftResults) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passants += other.en_passants;
        self.castles += other.castles;
        self.promotions += other.promotions;
        self.checks += other.checks;
        self.checkmates += other.checkmates;
    }
}

impl fmt::Display for PerftResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:       {}", self.nodes)?;
        writeln!(f, "captures:    {}", self.captures)?;
        writeln!(f, "en-passants: {}", self.en_passants)?;
        writeln!(f, "castles:     {}", self.castles)?;
        writeln!(f, "promotions:  {}", self.promotions)?;
        writeln!(f, "checks:      {}", self.checks)?;
        write!(f, "checkmates:  {}", self.checkmates)
    }
}

/// Error type for perft queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerftError {
    /// Depth must be non-negative
    InvalidDepth { depth: i64 },
    /// The position string did not parse
    Fen(FenError),
}

impl fmt::Display for PerftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerftError::InvalidDepth { depth } => {
                write!(f, "invalid ply depth: {depth}")
            }
            PerftError::Fen(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PerftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerftError::Fen(err) => Some(err),
            PerftError::InvalidDepth { .. } => None,
        }
    }
}

impl From<FenError> for PerftError {
    fn from(err: FenError) -> Self {
        PerftError::Fen(err)
    }
}

/// Run a perft traversal of the given depth from a FEN position.
///
/// Depth is validated before any parsing or traversal; negative depths
/// are rejected.
pub fn perft(fen: &str, depth: i64) -> Result<PerftResults, PerftError> {
    if depth < 0 {
        return Err(PerftError::InvalidDepth { depth });
    }

    let pos = Board::try_from_fen(fen)?;
    log::debug!("perft depth {depth} on `{fen}`");

    let mut results = PerftResults::default();
    perft_impl(&mut results, &pos, depth as u32);
    Ok(results)
}

/// Run a perft traversal with the root's legal moves partitioned across
/// worker threads.
///
/// Sibling subtrees share nothing once cloned, so each worker explores
/// its slice of the root's children with an independent counter set and
/// the partial results are summed at the end. `workers` is clamped to at
/// least one and at most the number of root children.
pub fn perft_parallel(fen: &str, depth: i64, workers: usize) -> Result<PerftResults, PerftError> {
    if depth < 0 {
        return Err(PerftError::InvalidDepth { depth });
    }

    let pos = Board::try_from_fen(fen)?;
    let depth = depth as u32;

    let mut results = PerftResults::default();
    if depth == 0 {
        results.nodes = 1;
        return Ok(results);
    }

    let mover = pos.side_to_move();
    let mut children: Vec<Board> = Vec::new();
    for &mv in &pos.generate_pseudo_legal_moves() {
        let mut child = pos.clone();
        child.apply_move(mv);
        if child.is_check(mover) {
            continue;
        }
        tally_legal_move(&mut results, mv, &child, mover);
        children.push(child);
    }

    if children.is_empty() {
        results.checkmates += 1;
        return Ok(results);
    }

    let workers = workers.clamp(1, children.len());
    let chunk_size = (children.len() + workers - 1) / workers;
    log::debug!(
        "perft_parallel: {} root children across {workers} workers",
        children.len()
    );

    let partials = std::thread::scope(|scope| {
        let handles: Vec<_> = children
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut partial = PerftResults::default();
                    for child in chunk {
                        perft_impl(&mut partial, child, depth - 1);
                    }
                    partial
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("perft worker panicked"))
            .collect::<Vec<_>>()
    });

    for partial in &partials {
        results.merge(partial);
    }
    Ok(results)
}

fn perft_impl(results: &mut PerftResults, pos: &Board, depth: u32) {
    if depth == 0 {
        results.nodes += 1;
        return;
    }

    let mover = pos.side_to_move();
    let mut seen_legal_move = false;
    for &mv in &pos.generate_pseudo_legal_moves() {
        let mut child = pos.clone();
        child.apply_move(mv);
        if child.is_check(mover) {
            continue;
        }

        seen_legal_move = true;
        tally_legal_move(results, mv, &child, mover);
        perft_impl(results, &child, depth - 1);
    }

    if !seen_legal_move {
        results.checkmates += 1;
    }
}

fn tally_legal_move(results: &mut PerftResults, mv: Move, child: &Board, mover: Color) {
    if mv.is_capture() {
        results.captures += 1;
    }
    if mv.is_en_passant() {
        results.en_passants += 1;
    }
    if mv.is_castle() {
        results.castles += 1;
    }
    if mv.is_promotion() {
        results.promotions += 1;
    }
    if child.is_check(mover.opponent()) {
        results.checks += 1;
    }
}

/// One visited position of a traced traversal: its FEN and the legal
/// moves out of it.
#[derive(Debug, Clone, Serialize)]
pub struct PositionTrace {
    pub fen: String,
    pub moves: Vec<String>,
}

/// Walk the tree like [`perft`] but record every visited interior
/// position and its legal moves.
///
/// This produces a lot of output and exists to debug the move generator:
/// the dump can be diffed against another engine's traversal of the same
/// position.
pub fn trace_positions(fen: &str, depth: i64) -> Result<Vec<PositionTrace>, PerftError> {
    if depth < 0 {
        return Err(PerftError::InvalidDepth { depth });
    }

    let pos = Board::try_from_fen(fen)?;
    let mut traces = Vec::new();
    trace_impl(&mut traces, &pos, depth as u32);
    Ok(traces)
}

fn trace_impl(traces: &mut Vec<PositionTrace>, pos: &Board, depth: u32) {
    if depth == 0 {
        return;
    }

    let mover = pos.side_to_move();
    let mut trace = PositionTrace {
        fen: pos.to_fen(),
        moves: Vec::new(),
    };

    for &mv in &pos.generate_pseudo_legal_moves() {
        let mut child = pos.clone();
        child.apply_move(mv);
        if !child.is_check(mover) {
            trace.moves.push(mv.to_string());
            trace_impl(traces, &child, depth - 1);
        }
    }

    traces.push(trace);
}
