//! The orchestration loop: validates that every `A`/`B` view addresses only
//! bytes within its own backing slice (the dtype/dimensionality part of
//! "2-D unsigned 8-bit matrix" is a type-level guarantee of [`MatrixView`]
//! already — the host bindings crate is where arbitrary input first gets
//! checked and turned into one, but a `MatrixView` can also be built
//! directly by a Rust caller with a mismatched stride, so this is checked
//! again here), allocates the requested aggregator state, walks
//! `A_list x B_list x` requested rotations in the fixed A-ascending,
//! B-ascending, R0/R90/R180/R270 order, and assembles the six-slot
//! [`ComputeResult`].

use eqcorr_types::{AggregatorRequest, ComputeResult, Error, FullMap, Histogram, MatrixView, Rotation, RotationMaps, RotationRequest};

use crate::aggregators::WorstTracker;
use crate::bpack;
use crate::kernel::{self, KernelSinks};
use crate::smart;

/// The seven useful `(DO_HIST, DO_FULL, DO_WORST)` monomorphizations of
/// [`kernel::correlate`], selected once per run rather than once per pair —
/// which aggregators are active never changes over the course of a call.
type CorrelateFn = for<'a, 'b, 'c> fn(MatrixView<'a>, MatrixView<'b>, (usize, usize), &mut KernelSinks<'c>);

fn select_correlate(agg_req: &AggregatorRequest) -> CorrelateFn {
    match (agg_req.do_hist, agg_req.do_full, agg_req.do_worst) {
        (true, false, false) => kernel::correlate::<true, false, false>,
        (false, true, false) => kernel::correlate::<false, true, false>,
        (false, false, true) => kernel::correlate::<false, false, true>,
        (true, true, false) => kernel::correlate::<true, true, false>,
        (true, false, true) => kernel::correlate::<true, false, true>,
        (false, true, true) => kernel::correlate::<false, true, true>,
        (true, true, true) => kernel::correlate::<true, true, true>,
        (false, false, false) => unreachable!("caller returns early when no aggregator is requested"),
    }
}

/// Runs the full `A_list x B_list` sweep and returns the assembled result.
pub fn run(
    a_list: &[MatrixView<'_>],
    b_list: &[MatrixView<'_>],
    rot_req: RotationRequest,
    agg_req: AggregatorRequest,
) -> Result<ComputeResult, Error> {
    for a in a_list {
        a.validate().map_err(Error::InvalidShape)?;
    }
    for b in b_list {
        b.validate().map_err(Error::InvalidShape)?;
    }

    if !agg_req.any() {
        return Ok(ComputeResult::default());
    }

    // Smart mode always computes all four rotation slots — only the
    // per-pair quarter-rotation work is pruned, never the caller's literal
    // `r0..r270` flags (§4.4 Setup: "if do_smart: req0 = req90 = req180 =
    // req270 = 1").
    let rot_req = if agg_req.do_smart {
        RotationRequest { r0: true, r90: true, r180: true, r270: true }
    } else {
        rot_req
    };

    let n_a = a_list.len();
    let n_b = b_list.len();
    let any_a_2d = a_list.iter().any(MatrixView::is_truly_2d);

    let packs = bpack::build(b_list, &rot_req, agg_req.do_smart, any_a_2d)?;
    tracing::trace!("b-pack preprocessing complete");

    // One bin per possible match count, zero through the largest B's cell
    // count, inclusive.
    let hist_len = b_list.iter().map(|b| b.rows() * b.cols()).max().unwrap_or(0) + 1;

    let mut histogram = agg_req.do_hist.then(|| Histogram::try_zeroed(hist_len)).transpose()?;
    let mut worst = agg_req.do_worst.then(|| WorstTracker::try_new(n_a, n_b)).transpose()?;

    let mut maps: [Option<RotationMaps>; 4] = [None, None, None, None];
    if agg_req.do_full {
        for r in rot_req.iter() {
            maps[r.index()] = Some(RotationMaps::empty(n_a, n_b));
        }
    }

    let correlate_fn = select_correlate(&agg_req);

    for (i_a, a) in a_list.iter().enumerate() {
        tracing::trace!(i_a, "entering pair loop for this A");
        for (i_b, b) in b_list.iter().enumerate() {
            let pack = &packs[i_b];
            let quarter_ok = smart::pair_needs_quarter_rotations(a, b);

            for r in rot_req.iter() {
                let is_quarter = matches!(r, Rotation::R90 | Rotation::R270);
                if is_quarter && agg_req.do_smart && !quarter_ok {
                    continue;
                }

                let (hk, wk) = r.rotated_shape(b.rows(), b.cols());
                let b_rot = match pack.view(r, hk, wk) {
                    Some(view) => view,
                    None => continue,
                };

                let (ho, wo) = kernel::output_shape(a.rows(), a.cols(), hk, wk);
                let mut full_map = agg_req.do_full.then(|| FullMap::try_zeroed(ho, wo)).transpose()?;

                let mut sinks = KernelSinks { histogram: histogram.as_mut(), full_map: full_map.as_mut(), worst: worst.as_mut() };
                correlate_fn(*a, b_rot, (i_a, i_b), &mut sinks);

                if let Some(map) = full_map {
                    maps[r.index()].as_mut().expect("allocated above whenever do_full is set").set(i_a, i_b, map);
                }
            }
        }
    }

    let [r0, r90, r180, r270] = maps;
    Ok(ComputeResult {
        histogram,
        r0,
        r90,
        r180,
        r270,
        worst_pairs: worst.map(WorstTracker::into_pairs),
    })
}
