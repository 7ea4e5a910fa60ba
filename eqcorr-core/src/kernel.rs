//! The sliding-equality kernel: for every translation of the rotated `B`
//! over `A`, counts cells where both operands are nonzero and equal.
//!
//! One generic function, monomorphized over three `const bool` selectors so
//! the seven useful `(DO_HIST, DO_FULL, DO_WORST)` combinations each get
//! their own specialized, branch-free-on-mode instantiation — the
//! dispatcher never calls this with all three false, so the empty
//! combination is simply never monomorphized.

use eqcorr_types::{FullMap, Histogram, MatrixView};

use crate::aggregators::WorstTracker;

/// The output map shape for operand shape `(ha, wa)` against rotated-B
/// logical shape `(hk, wk)`. Computed with signed arithmetic so
/// degenerate (zero-sized) operands never underflow — a result that would
/// be negative saturates to zero, meaning no translation is visited at all.
pub fn output_shape(ha: usize, wa: usize, hk: usize, wk: usize) -> (usize, usize) {
    let ho = (ha as isize + hk as isize - 1).max(0) as usize;
    let wo = (wa as isize + wk as isize - 1).max(0) as usize;
    (ho, wo)
}

/// The three optional sinks a kernel call may feed. Each is
/// `Some` iff the corresponding `const DO_*` selector is `true`; the
/// kernel never checks this at runtime, it is an invariant the dispatcher
/// upholds.
pub struct KernelSinks<'a> {
    pub histogram: Option<&'a mut Histogram>,
    pub full_map: Option<&'a mut FullMap>,
    pub worst: Option<&'a mut WorstTracker>,
}

/// Slides `b_rot` (already rotated into the desired logical orientation)
/// over `a`, dispatching each translation's match count to the enabled
/// sinks in `out`.
pub fn correlate<const DO_HIST: bool, const DO_FULL: bool, const DO_WORST: bool>(
    a: MatrixView<'_>,
    b_rot: MatrixView<'_>,
    pair: (usize, usize),
    out: &mut KernelSinks<'_>,
) {
    let (ha, wa) = (a.rows() as isize, a.cols() as isize);
    let (hk, wk) = (b_rot.rows() as isize, b_rot.cols() as isize);
    let (ho, wo) = output_shape(a.rows(), a.cols(), b_rot.rows(), b_rot.cols());

    let contiguous = a.is_contiguous_inner() && b_rot.is_contiguous_inner();

    for oy in 0..ho as isize {
        let by0 = (hk - 1 - oy).max(0);
        let by1 = (ha + hk - 2 - oy).min(hk - 1);
        for ox in 0..wo as isize {
            let bx0 = (wk - 1 - ox).max(0);
            let bx1 = (wa + wk - 2 - ox).min(wk - 1);

            let mut acc: i32 = 0;
            if by1 >= by0 && bx1 >= bx0 {
                if contiguous {
                    for by in by0..=by1 {
                        let ay = (oy - (hk - 1) + by) as usize;
                        let ax0 = (ox - (wk - 1) + bx0) as usize;
                        let a_row = &a.row_slice(ay)[ax0..ax0 + (bx1 - bx0 + 1) as usize];
                        let b_row = &b_rot.row_slice(by as usize)[bx0 as usize..=bx1 as usize];
                        for (&av, &bv) in a_row.iter().zip(b_row.iter()) {
                            if av != 0 && bv != 0 && av == bv {
                                acc += 1;
                            }
                        }
                    }
                } else {
                    for by in by0..=by1 {
                        let ay = (oy - (hk - 1) + by) as usize;
                        for bx in bx0..=bx1 {
                            let ax = (ox - (wk - 1) + bx) as usize;
                            let av = a.get(ay, ax);
                            let bv = b_rot.get(by as usize, bx as usize);
                            if av != 0 && bv != 0 && av == bv {
                                acc += 1;
                            }
                        }
                    }
                }
            }

            if DO_WORST {
                out.worst.as_deref_mut().expect("DO_WORST requires a worst sink").observe(pair.0, pair.1, acc);
            }
            if DO_HIST {
                let hist = out.histogram.as_deref_mut().expect("DO_HIST requires a histogram sink");
                let bin = acc.clamp(0, hist.len() as i32 - 1) as usize;
                hist.0[bin] += 1;
            }
            if DO_FULL {
                let map = out.full_map.as_deref_mut().expect("DO_FULL requires a full-map sink");
                map.set(oy as usize, ox as usize, acc);
            }
        }
    }
}
