//! Two-dimensional equality correlation: sliding-window template matching
//! between byte matrices, with optional 90-degree-multiple rotation of the
//! template and three independent aggregators (histogram, full translation
//! map, global-maximum tracker).
//!
//! This crate is pure computation over borrowed [`MatrixView`]s; it knows
//! nothing about NumPy, Python, or any other host. See `eqcorr-py` for the
//! bindings that get arbitrary host arrays into that shape.

mod aggregators;
mod bpack;
mod dispatch;
mod kernel;
mod smart;

pub use eqcorr_types::{AggregatorRequest, ComputeResult, Error, FullMap, Histogram, MatrixView, Rotation, RotationMaps, RotationRequest};

pub use kernel::output_shape;

/// Runs the correlation sweep described by `rot_req` and `agg_req` over
/// every `(A, B)` pair in `a_list x b_list`, in a fixed A-ascending,
/// B-ascending, R0/R90/R180/R270 order.
///
/// Returns a [`ComputeResult`] with only the requested slots populated:
/// each slot is `Some` iff its corresponding `agg_req` flag is set, even
/// when `a_list`/`b_list` is empty or no rotation was requested — an empty
/// `do_hist` histogram is still `Some(Histogram::zeroed(..))`, not `None`.
/// Only a request with no aggregator flag set at all produces an
/// all-`None` result, since there is then nothing to allocate.
pub fn compute(
    a_list: &[MatrixView<'_>],
    b_list: &[MatrixView<'_>],
    rot_req: RotationRequest,
    agg_req: AggregatorRequest,
) -> Result<ComputeResult, Error> {
    let span = tracing::info_span!(
        "compute",
        n_a = a_list.len(),
        n_b = b_list.len(),
        do_hist = agg_req.do_hist,
        do_full = agg_req.do_full,
        do_worst = agg_req.do_worst,
        do_smart = agg_req.do_smart,
    );
    let _guard = span.enter();
    tracing::debug!("starting correlation sweep");

    let result = dispatch::run(a_list, b_list, rot_req, agg_req);

    match &result {
        Ok(_) => tracing::debug!("correlation sweep finished"),
        Err(err) => tracing::warn!(?err, "correlation sweep failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_is_callable_end_to_end() {
        let a_data = [1u8, 2, 3];
        let a = [MatrixView::contiguous(&a_data, 1, 3)];
        let b_data = [1u8, 2, 3];
        let b = [MatrixView::contiguous(&b_data, 1, 3)];
        let req = RotationRequest { r0: true, r90: false, r180: false, r270: false };
        let agg = AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: false };

        let result = compute(&a, &b, req, agg).unwrap();
        let map = result.r0.unwrap().get(0, 0).unwrap().clone();
        assert_eq!(map.as_slice(), &[1, 2, 3, 2, 1]);
    }
}
