//! Times `eqcorr_core::compute` across representative sizes and the seven
//! useful aggregator combinations, with and without smart mode. There is no
//! second implementation to verify against here (unlike this workspace's
//! other benchmarked applications), so `verified` just confirms the call
//! completed without an allocation error.

use eqcorr_core::{compute, AggregatorRequest, MatrixView, RotationRequest};

use crate::harness::{median_of, BenchResult};

/// A deterministic, non-degenerate byte matrix of the given shape: cycles
/// through 1..=250 so almost every cell is a distinct nonzero label.
fn synthetic_matrix(rows: usize, cols: usize) -> Vec<u8> {
    (0..rows * cols).map(|i| (1 + (i % 250)) as u8).collect()
}

const ALL_ROTATIONS: RotationRequest = RotationRequest { r0: true, r90: true, r180: true, r270: true };

fn bench_one(label: &str, n_a: usize, a_shape: (usize, usize), n_b: usize, b_shape: (usize, usize), agg: AggregatorRequest, rounds: usize) -> BenchResult {
    let a_data: Vec<Vec<u8>> = (0..n_a).map(|_| synthetic_matrix(a_shape.0, a_shape.1)).collect();
    let b_data: Vec<Vec<u8>> = (0..n_b).map(|_| synthetic_matrix(b_shape.0, b_shape.1)).collect();
    let a_views: Vec<MatrixView<'_>> = a_data.iter().map(|d| MatrixView::contiguous(d, a_shape.0, a_shape.1)).collect();
    let b_views: Vec<MatrixView<'_>> = b_data.iter().map(|d| MatrixView::contiguous(d, b_shape.0, b_shape.1)).collect();

    let mut ok = true;
    let rust_ms = median_of(rounds, || {
        let start = std::time::Instant::now();
        if compute(&a_views, &b_views, ALL_ROTATIONS, agg).is_err() {
            ok = false;
        }
        start.elapsed().as_secs_f64() * 1000.0
    });

    BenchResult { name: label.to_string(), rust_ms, verified: Some(ok) }
}

pub struct Config {
    pub rounds: usize,
    pub profile: String,
}

pub fn run(cfg: &Config) -> Vec<BenchResult> {
    let (n_a, n_b, a_shape, b_shape): (usize, usize, (usize, usize), (usize, usize)) = match cfg.profile.as_str() {
        "quick" => (4, 4, (64, 64), (8, 8)),
        "full" => (32, 32, (512, 512), (32, 32)),
        _ => (8, 8, (128, 128), (16, 16)),
    };

    let combos: &[(&str, bool, bool, bool)] = &[
        ("hist", true, false, false),
        ("full", false, true, false),
        ("worst", false, false, true),
        ("hist+full", true, true, false),
        ("hist+worst", true, false, true),
        ("full+worst", false, true, true),
        ("hist+full+worst", true, true, true),
    ];

    let mut results = Vec::with_capacity(combos.len() * 2);
    for &(name, do_hist, do_full, do_worst) in combos {
        for &do_smart in &[false, true] {
            let agg = AggregatorRequest { do_hist, do_full, do_worst, do_smart };
            let label = format!("{name} smart={do_smart}");
            results.push(bench_one(&label, n_a, a_shape, n_b, b_shape, agg, cfg.rounds));
        }
    }
    results
}
