/// Clockwise rotation applied to the `B` operand before sliding it over `A`.
///
/// [`Rotation::remap`] carries the coordinate remap table for each variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All four rotations, in the fixed visit order used by the dispatcher:
    /// R0, R90, R180, R270.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// The logical shape of `B` after this rotation is applied, given `B`'s
    /// original shape `(hb, wb)`.
    pub fn rotated_shape(self, hb: usize, wb: usize) -> (usize, usize) {
        match self {
            Rotation::R0 | Rotation::R180 => (hb, wb),
            Rotation::R90 | Rotation::R270 => (wb, hb),
        }
    }

    /// Maps a rotated coordinate `(by, bx)` back to the original `B`'s
    /// `(row, col)`.
    pub fn remap(self, by: usize, bx: usize, hb: usize, wb: usize) -> (usize, usize) {
        match self {
            Rotation::R0 => (by, bx),
            Rotation::R90 => (hb - 1 - bx, by),
            Rotation::R180 => (hb - 1 - by, wb - 1 - bx),
            Rotation::R270 => (bx, wb - 1 - by),
        }
    }

    /// A dense `0..4` index, for callers that key a fixed-size array by
    /// rotation (the B-pack buffers, the per-rotation result slots).
    pub fn index(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R0,
            Rotation::R90 => Rotation::R270,
            Rotation::R180 => Rotation::R180,
            Rotation::R270 => Rotation::R90,
        }
    }
}
