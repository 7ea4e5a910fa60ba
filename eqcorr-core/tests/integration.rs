use eqcorr_core::{compute, AggregatorRequest, MatrixView, RotationRequest};

fn r0_only() -> RotationRequest {
    RotationRequest { r0: true, r90: false, r180: false, r270: false }
}

fn all_rotations() -> RotationRequest {
    RotationRequest { r0: true, r90: true, r180: true, r270: true }
}

#[test]
fn scenario_1_histogram_counts_single_nonzero_match() {
    // A has exactly one cell equal to B's only (nonzero) value; since Hk=Wk=1
    // every one of the Ho*Wo=4 translations overlaps exactly one A cell, so
    // bin 1 gets exactly the one match and bin 0 the other three (consistent
    // with the histogram-total law: 1 + 3 == Ho*Wo).
    let a_data = [1u8, 2, 3, 4];
    let a = [MatrixView::contiguous(&a_data, 2, 2)];
    let b_data = [1u8];
    let b = [MatrixView::contiguous(&b_data, 1, 1)];
    let agg = AggregatorRequest { do_hist: true, do_full: false, do_worst: false, do_smart: false };

    let result = compute(&a, &b, r0_only(), agg).unwrap();
    let hist = result.histogram.unwrap();
    assert_eq!(hist.len(), 2);
    assert_eq!(hist.0[1], 1);
    assert_eq!(hist.0[0], 3);
}

#[test]
fn scenario_2_identity_translation_full_map() {
    let a_data = [1u8, 0, 0, 1];
    let a = [MatrixView::contiguous(&a_data, 2, 2)];
    let b_data = [1u8];
    let b = [MatrixView::contiguous(&b_data, 1, 1)];
    let agg = AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: false };

    let result = compute(&a, &b, r0_only(), agg).unwrap();
    let map = result.r0.unwrap().get(0, 0).unwrap().clone();
    assert_eq!((map.rows(), map.cols()), (2, 2));
    assert_eq!(map.as_slice(), &[1, 0, 0, 1]);
}

#[test]
fn scenario_3_one_dimensional_overlap_counts() {
    let a_data = [1u8, 2, 3];
    let a = [MatrixView::contiguous(&a_data, 1, 3)];
    let b_data = [1u8, 2, 3];
    let b = [MatrixView::contiguous(&b_data, 1, 3)];
    let agg = AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: false };

    let result = compute(&a, &b, r0_only(), agg).unwrap();
    let map = result.r0.unwrap().get(0, 0).unwrap().clone();
    assert_eq!((map.rows(), map.cols()), (1, 5));
    assert_eq!(map.as_slice(), &[1, 2, 3, 2, 1]);
}

#[test]
fn scenario_4_r0_and_r180_agree_on_centered_alignment_worst() {
    let a_data = [1u8, 2, 2, 1];
    let a = [MatrixView::contiguous(&a_data, 2, 2)];
    let b_data = [1u8, 2, 2, 1];
    let b = [MatrixView::contiguous(&b_data, 2, 2)];
    let req = RotationRequest { r0: true, r90: false, r180: true, r270: false };
    let agg = AggregatorRequest { do_hist: false, do_full: false, do_worst: true, do_smart: false };

    let result = compute(&a, &b, req, agg).unwrap();
    assert_eq!(result.worst_pairs.unwrap(), vec![(0, 0)]);
}

#[test]
fn scenario_5_worst_pairs_preserve_insertion_order_across_a_list() {
    let a0 = [1u8, 2, 3, 4];
    let a1 = [4u8, 3, 2, 1];
    let a = [MatrixView::contiguous(&a0, 2, 2), MatrixView::contiguous(&a1, 2, 2)];
    let b_data = [1u8];
    let b = [MatrixView::contiguous(&b_data, 1, 1)];
    let agg = AggregatorRequest { do_hist: false, do_full: false, do_worst: true, do_smart: false };

    let result = compute(&a, &b, r0_only(), agg).unwrap();
    assert_eq!(result.worst_pairs.unwrap(), vec![(0, 0), (1, 0)]);
}

#[test]
fn scenario_6_zero_never_matches() {
    let a_data = [5u8];
    let a = [MatrixView::contiguous(&a_data, 1, 1)];
    let b_data = [0u8];
    let b = [MatrixView::contiguous(&b_data, 1, 1)];
    let agg = AggregatorRequest { do_hist: true, do_full: true, do_worst: false, do_smart: false };

    let result = compute(&a, &b, r0_only(), agg).unwrap();
    let map = result.r0.unwrap().get(0, 0).unwrap().clone();
    assert_eq!(map.as_slice(), &[0]);
    assert_eq!(result.histogram.unwrap().0[0], 1);
}

#[test]
fn max_bounding_holds_across_every_output_cell() {
    let a_data = [1u8, 2, 3, 1, 2, 3];
    let a = [MatrixView::contiguous(&a_data, 2, 3)];
    let b_data = [1u8, 2];
    let b = [MatrixView::contiguous(&b_data, 1, 2)];
    let agg = AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: false };

    let result = compute(&a, &b, all_rotations(), agg).unwrap();
    let max_possible = (b_data.len()) as i32;
    for maps in [result.r0, result.r90, result.r180, result.r270] {
        let Some(maps) = maps else { continue };
        let map = maps.get(0, 0).unwrap();
        for &acc in map.as_slice() {
            assert!(acc >= 0 && acc <= max_possible);
        }
    }
}

#[test]
fn histogram_total_matches_sum_of_visited_translations() {
    let a_data = [1u8, 2, 3, 4, 5, 6];
    let a = [MatrixView::contiguous(&a_data, 2, 3)];
    let b_data = [1u8, 2];
    let b = [MatrixView::contiguous(&b_data, 1, 2)];
    let agg = AggregatorRequest { do_hist: true, do_full: false, do_worst: false, do_smart: false };

    let result = compute(&a, &b, all_rotations(), agg).unwrap();
    let total: u64 = result.histogram.unwrap().0.iter().sum();

    let (ho, wo) = eqcorr_core::output_shape(2, 3, 1, 2);
    let (ho90, wo90) = eqcorr_core::output_shape(2, 3, 2, 1);
    assert_eq!(total, 2 * (ho * wo) as u64 + 2 * (ho90 * wo90) as u64);
}

#[test]
fn symmetry_law_r0_equals_r180_flipped_for_zero_free_operands() {
    let a_data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
    let a = [MatrixView::contiguous(&a_data, 3, 3)];
    let b_data = [1u8, 2, 3, 4];
    let b = [MatrixView::contiguous(&b_data, 2, 2)];
    let req = RotationRequest { r0: true, r90: false, r180: true, r270: false };
    let agg = AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: false };

    let result = compute(&a, &b, req, agg).unwrap();
    let r0 = result.r0.unwrap().get(0, 0).unwrap().clone();
    let r180 = result.r180.unwrap().get(0, 0).unwrap().clone();

    assert_eq!((r0.rows(), r0.cols()), (r180.rows(), r180.cols()));
    let (rows, cols) = (r0.rows(), r0.cols());
    for row in 0..rows {
        for col in 0..cols {
            let flipped = r180.get(rows - 1 - row, cols - 1 - col);
            assert_eq!(r0.get(row, col), flipped);
        }
    }
}

#[test]
fn smart_mode_collapses_quarter_rotation_work_for_all_one_d_pairs() {
    let a_data = [1u8, 2, 3];
    let a = [MatrixView::contiguous(&a_data, 1, 3)];
    let b_data = [1u8, 2];
    let b = [MatrixView::contiguous(&b_data, 1, 2)];
    let agg = AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: true };

    let result = compute(&a, &b, all_rotations(), agg).unwrap();
    assert!(result.r0.unwrap().get(0, 0).is_some());
    assert!(result.r90.unwrap().get(0, 0).is_none());
    assert!(result.r270.unwrap().get(0, 0).is_none());
}

#[test]
fn smart_mode_ignores_caller_rotation_flags_and_computes_all_four() {
    // §4.4 Setup forces req0=req90=req180=req270=1 whenever do_smart is
    // set; a caller requesting only R0 must still get all four slots
    // present, with quarter-rotation cells present for a truly-2D pair.
    let a_data = [1u8, 2, 2, 1];
    let a = [MatrixView::contiguous(&a_data, 2, 2)];
    let b_data = [1u8, 2, 2, 1];
    let b = [MatrixView::contiguous(&b_data, 2, 2)];
    let agg = AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: true };

    let result = compute(&a, &b, r0_only(), agg).unwrap();
    assert!(result.r0.unwrap().get(0, 0).is_some());
    assert!(result.r90.unwrap().get(0, 0).is_some());
    assert!(result.r180.unwrap().get(0, 0).is_some());
    assert!(result.r270.unwrap().get(0, 0).is_some());
}

#[test]
fn enabled_aggregators_stay_present_for_empty_lists_and_unrequested_rotations() {
    let agg = AggregatorRequest { do_hist: true, do_full: true, do_worst: true, do_smart: false };
    let result = compute(&[], &[], all_rotations(), agg).unwrap();
    assert!(result.histogram.is_some());
    assert!(result.r0.is_some());
    assert!(result.worst_pairs.unwrap().is_empty());

    let a_data = [1u8];
    let a = [MatrixView::contiguous(&a_data, 1, 1)];
    let b = [MatrixView::contiguous(&a_data, 1, 1)];
    let no_rotations = RotationRequest { r0: false, r90: false, r180: false, r270: false };
    let result = compute(&a, &b, no_rotations, agg).unwrap();
    assert!(result.histogram.is_some());
    assert!(result.worst_pairs.unwrap().is_empty());
}
