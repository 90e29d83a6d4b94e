//! Precomputed attack tables for every piece kind.
//!
//! Leaper tables (knight, king, pawn) store final attack bitboards.
//! Slider attacks use the classic ray method: per square and direction we
//! store the maximal unobstructed ray to the board edge, and resolve
//! blockers at query time. The first blocking piece along a ray stays in
//! the attack set (it may be a capture); everything beyond it is removed
//! by XOR-ing away the blocker's own ray in the same direction.
//!
//! All tables are built exactly once behind `once_cell::sync::Lazy`:
//! concurrent first callers block until the single build completes, and
//! no caller ever triggers a rebuild.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Direction, Square};

fn walk_ray(sq: usize, dir: Direction) -> u64 {
    let (dr, df) = dir.delta();
    let mut mask = 0u64;
    let mut r = (sq / 8) as isize + dr;
    let mut f = (sq % 8) as isize + df;
    while (0..8).contains(&r) && (0..8).contains(&f) {
        mask |= 1u64 << (r * 8 + f);
        r += dr;
        f += df;
    }
    mask
}

/// Maximal unobstructed rays, indexed `[square][direction]`.
static RAYS: Lazy<[[u64; 8]; 64]> = Lazy::new(|| {
    let mut rays = [[0u64; 8]; 64];
    for (sq, entry) in rays.iter_mut().enumerate() {
        for dir in Direction::ALL {
            entry[dir.index()] = walk_ray(sq, dir);
        }
    }
    log::debug!("sliding ray tables initialized");
    rays
});

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << (nr * 8 + nf);
            }
        }
        *slot = mask;
    }
    attacks
}

static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

/// Pawn capture patterns, indexed `[color][square]`.
static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [leaper_table(&[(1, -1), (1, 1)]), leaper_table(&[(-1, -1), (-1, 1)])]
});

/// Forces construction of every table.
pub(crate) fn initialize() {
    Lazy::force(&RAYS);
    Lazy::force(&KNIGHT_ATTACKS);
    Lazy::force(&KING_ATTACKS);
    Lazy::force(&PAWN_ATTACKS);
}

/// Knight attack set for a square.
#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.index()])
}

/// King attack set for a square.
#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.index()])
}

/// Pawn capture set for a pawn of the given color on a square.
#[inline]
pub(crate) fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][sq.index()])
}

/// Attack set along a single ray, truncated at the first blocker.
///
/// The blocker square itself remains in the set.
#[inline]
pub(crate) fn ray_attacks(sq: Square, dir: Direction, occupancy: Bitboard) -> Bitboard {
    let ray = RAYS[sq.index()][dir.index()];
    let blockers = ray & occupancy.0;
    if blockers == 0 {
        return Bitboard(ray);
    }

    let blocker = if dir.is_increasing() {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    };
    Bitboard(ray ^ RAYS[blocker][dir.index()])
}

/// Bishop attack set: both diagonals.
#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(sq, Direction::NorthEast, occupancy)
        | ray_attacks(sq, Direction::NorthWest, occupancy)
        | ray_attacks(sq, Direction::SouthEast, occupancy)
        | ray_attacks(sq, Direction::SouthWest, occupancy)
}

/// Rook attack set: file and rank.
#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(sq, Direction::North, occupancy)
        | ray_attacks(sq, Direction::South, occupancy)
        | ray_attacks(sq, Direction::East, occupancy)
        | ray_attacks(sq, Direction::West, occupancy)
}

/// Queen attack set: all eight directions.
#[inline]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}
