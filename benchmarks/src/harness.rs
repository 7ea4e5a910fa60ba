use std::time::Instant;

/// One benchmark's timing result. Unlike this workspace's other benchmarked
/// applications, there's no second implementation (Python, Burn, ...) to
/// compare the kernel against here, so this only carries the kernel's own
/// timing — the comparison this crate draws is fast-path vs. general-path
/// and smart-mode vs. full sweep, not against an external reference.
pub struct BenchResult {
    pub name: String,
    pub rust_ms: f64,
    pub verified: Option<bool>,
}

/// Run a benchmark function `iterations` times and return the median.
pub fn median_of(iterations: usize, mut f: impl FnMut() -> f64) -> f64 {
    let mut times: Vec<f64> = (0..iterations).map(|_| f()).collect();
    times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    times[times.len() / 2]
}

pub fn time_ms(mut f: impl FnMut()) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64() * 1000.0
}

/// Print a comparison table to stdout.
pub fn print_table(results: &[BenchResult]) {
    let name_w = 28;
    let col_w = 12;

    println!();
    println!("{:<name_w$} {:>col_w$} {:>6}", "Benchmark", "Rust", "Check", name_w = name_w, col_w = col_w);
    println!("{}", "-".repeat(name_w + col_w + 6 + 2));

    for r in results {
        let check_str = match r.verified {
            Some(true) => "\u{2713}",
            Some(false) => "\u{2717}",
            None => "\u{2014}",
        };

        println!(
            "{:<name_w$} {:>col_w$.1}ms {:>6}",
            r.name, r.rust_ms, check_str,
            name_w = name_w, col_w = col_w
        );
    }
    println!();
}
