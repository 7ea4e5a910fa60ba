//! Smart-mode pruning policy: skip quarter-rotation work for pairs where it
//! cannot change the result.

use eqcorr_types::MatrixView;

/// Per-pair: should the two quarter rotations (R90, R270) be computed for
/// this `(A, B)` pair? R0/R180 are always computed regardless of this
/// policy (the dispatcher never consults it for those).
pub fn pair_needs_quarter_rotations(a: &MatrixView<'_>, b: &MatrixView<'_>) -> bool {
    a.is_truly_2d() || b.is_truly_2d()
}

/// Coarser, `B`-list-granularity version of the same predicate, used by the
/// B-pack preprocessor to decide whether it's worth materializing a given
/// `B`'s quarter-rotation buffers at all. Buffers are allocated eagerly
/// per-`B`, gated only by this coarse check (see DESIGN.md for why eager
/// beat lazy here).
///
/// `any_a_2d` is true iff at least one matrix in `A_list` is truly 2-D; when
/// it's true, some future pair involving this `B` might need the quarter
/// rotations no matter what `B`'s own shape is, so the buffer must be
/// built. When it's false, every pair through this `B` falls back to
/// `B`'s own shape, so [`pair_needs_quarter_rotations`] with `any_a_2d`
/// folded in collapses to just checking `b.is_truly_2d()`.
pub fn bpack_needs_quarter_rotations(do_smart: bool, any_a_2d: bool, b: &MatrixView<'_>) -> bool {
    !do_smart || any_a_2d || b.is_truly_2d()
}
