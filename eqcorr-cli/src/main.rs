//! Manual smoke-test / `perf` target for the equality-correlation kernel.
//!
//! Builds a handful of representative scenarios directly in memory and
//! calls `compute` without going through Python at all, for quick manual
//! inspection of the kernel's output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use eqcorr_core::{compute, AggregatorRequest, ComputeResult, Histogram, MatrixView, RotationMaps, RotationRequest};

fn print_histogram(name: &str, hist: &Option<Histogram>) {
    match hist {
        Some(h) => println!("  {name}: {:?}", h.0),
        None => println!("  {name}: absent"),
    }
}

fn print_rotation_maps(name: &str, maps: &Option<RotationMaps>) {
    match maps {
        None => println!("  {name}: absent"),
        Some(maps) => {
            for (i_a, row) in maps.rows().iter().enumerate() {
                for (i_b, cell) in row.iter().enumerate() {
                    match cell {
                        Some(map) => {
                            println!("  {name}[{i_a}][{i_b}] shape=({}, {}) {:?}", map.rows(), map.cols(), map.as_slice());
                        }
                        None => println!("  {name}[{i_a}][{i_b}]: not computed"),
                    }
                }
            }
        }
    }
}

fn run_scenario(label: &str, a_list: &[MatrixView<'_>], b_list: &[MatrixView<'_>], rot_req: RotationRequest, agg_req: AggregatorRequest) {
    println!("=== {label} ===");
    match compute(a_list, b_list, rot_req, agg_req) {
        Ok(ComputeResult { histogram, r0, r90, r180, r270, worst_pairs }) => {
            print_histogram("histogram", &histogram);
            print_rotation_maps("r0", &r0);
            print_rotation_maps("r90", &r90);
            print_rotation_maps("r180", &r180);
            print_rotation_maps("r270", &r270);
            match worst_pairs {
                Some(pairs) => println!("  worst_pairs: {pairs:?}"),
                None => println!("  worst_pairs: absent"),
            }
        }
        Err(err) => eprintln!("  FAILED: {err:?}"),
    }
    println!();
}

fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))),
        )
        .init();

    let r0_only = RotationRequest { r0: true, r90: false, r180: false, r270: false };
    let r0_r180 = RotationRequest { r0: true, r90: false, r180: true, r270: false };

    // Scenario 1: histogram only.
    let s1_a = [1u8, 2, 3, 4];
    let s1_b = [1u8];
    run_scenario(
        "scenario 1: histogram",
        &[MatrixView::contiguous(&s1_a, 2, 2)],
        &[MatrixView::contiguous(&s1_b, 1, 1)],
        r0_only,
        AggregatorRequest { do_hist: true, do_full: false, do_worst: false, do_smart: false },
    );

    // Scenario 2: identity translation, full map.
    let s2_a = [1u8, 0, 0, 1];
    let s2_b = [1u8];
    run_scenario(
        "scenario 2: identity translation",
        &[MatrixView::contiguous(&s2_a, 2, 2)],
        &[MatrixView::contiguous(&s2_b, 1, 1)],
        r0_only,
        AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: false },
    );

    // Scenario 3: 1-D overlap counts.
    let s3_a = [1u8, 2, 3];
    let s3_b = [1u8, 2, 3];
    run_scenario(
        "scenario 3: one-dimensional overlap",
        &[MatrixView::contiguous(&s3_a, 1, 3)],
        &[MatrixView::contiguous(&s3_b, 1, 3)],
        r0_only,
        AggregatorRequest { do_hist: false, do_full: true, do_worst: false, do_smart: false },
    );

    // Scenario 4: R0 + R180 worst tracking, centered alignment.
    let s4_a = [1u8, 2, 2, 1];
    let s4_b = [1u8, 2, 2, 1];
    run_scenario(
        "scenario 4: r0+r180 worst tracking",
        &[MatrixView::contiguous(&s4_a, 2, 2)],
        &[MatrixView::contiguous(&s4_b, 2, 2)],
        r0_r180,
        AggregatorRequest { do_hist: false, do_full: false, do_worst: true, do_smart: false },
    );

    // Scenario 5: worst tracking across two A's against one B.
    let s5_a0 = [1u8, 2, 3, 4];
    let s5_a1 = [4u8, 3, 2, 1];
    let s5_b = [1u8];
    run_scenario(
        "scenario 5: worst tracking across A_list",
        &[MatrixView::contiguous(&s5_a0, 2, 2), MatrixView::contiguous(&s5_a1, 2, 2)],
        &[MatrixView::contiguous(&s5_b, 1, 1)],
        r0_only,
        AggregatorRequest { do_hist: false, do_full: false, do_worst: true, do_smart: false },
    );

    // Scenario 6: zero is never a match.
    let s6_a = [5u8];
    let s6_b = [0u8];
    run_scenario(
        "scenario 6: zero never matches",
        &[MatrixView::contiguous(&s6_a, 1, 1)],
        &[MatrixView::contiguous(&s6_b, 1, 1)],
        r0_only,
        AggregatorRequest { do_hist: true, do_full: true, do_worst: false, do_smart: false },
    );
}
