use quickcheck::{Arbitrary, Gen};

use crate::{Position, Symbol};

const MAX_SIZE: usize = 6;

/// A board size together with a sequence of valid moves on it.
#[derive(Clone, Debug)]
pub struct Placements {
    pub size: usize,
    // Distinct, in-bounds positions
    pub moves: Vec<(Position, Symbol)>,
}

impl Arbitrary for Placements {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::arbitrary(g) % MAX_SIZE + 1;

        let mut cells: Vec<Position> = (0..size as isize)
            .flat_map(|i| (0..size as isize).map(move |j| Position::new(i, j)))
            .collect();
        // Fisher-Yates, since Gen doesn't expose its RNG
        for k in (1..cells.len()).rev() {
            let other = usize::arbitrary(g) % (k + 1);
            cells.swap(k, other);
        }
        let num_moves = usize::arbitrary(g) % (cells.len() + 1);
        cells.truncate(num_moves);

        let moves = cells
            .into_iter()
            .map(|pos| (pos, Symbol::arbitrary(g)))
            .collect();
        Placements { size, moves }
    }
}

/// A position that may or may not lie on a board of up to `MAX_SIZE`.
#[derive(Clone, Debug)]
pub struct Probe(pub Position);

impl Arbitrary for Probe {
    fn arbitrary(g: &mut Gen) -> Self {
        let range = MAX_SIZE as isize + 4;
        let i = (u8::arbitrary(g) as isize % range) - 2;
        let j = (u8::arbitrary(g) as isize % range) - 2;
        Probe(Position::new(i, j))
    }
}

impl Arbitrary for Symbol {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Symbol::ALL).unwrap()
    }
}
