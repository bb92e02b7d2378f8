//! Subset enumeration over the ten roster slots.
//!
//! A split is a 10-bit mask: bit `i` set puts roster index `i` in group A.
//! Only masks with exactly five bits and bit 0 set are canonical, which
//! keeps one representative of every mirrored pair.

use crate::models::{ROSTER_SIZE, SQUAD_SIZE};

/// C(10, 5) / 2
pub const CANONICAL_SPLITS: usize = 126;

/// All canonical masks in ascending order.
pub fn canonical_masks() -> impl Iterator<Item = u16> {
    (0u16..1 << ROSTER_SIZE).filter(|&mask| is_canonical(mask))
}

pub fn is_canonical(mask: u16) -> bool {
    mask & 1 == 1 && mask.count_ones() as usize == SQUAD_SIZE && mask >> ROSTER_SIZE == 0
}

/// Canonical representative of the partition `{mask, !mask}`.
pub fn canonicalize(mask: u16) -> u16 {
    let full = (1u16 << ROSTER_SIZE) - 1;
    if mask & 1 == 1 {
        mask & full
    } else {
        !mask & full
    }
}

/// Roster indices of group A and group B, each ascending.
pub fn partition(mask: u16) -> ([usize; SQUAD_SIZE], [usize; SQUAD_SIZE]) {
    let mut group_a = [0; SQUAD_SIZE];
    let mut group_b = [0; SQUAD_SIZE];
    let (mut a, mut b) = (0, 0);

    for i in 0..ROSTER_SIZE {
        if mask & (1 << i) != 0 {
            group_a[a] = i;
            a += 1;
        } else {
            group_b[b] = i;
            b += 1;
        }
    }

    debug_assert_eq!((a, b), (SQUAD_SIZE, SQUAD_SIZE), "mask {mask:#012b} is not a 5/5 split");
    (group_a, group_b)
}
