mod harness;
mod kernel_bench;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn print_usage() {
    eprintln!("Usage: benchmarks [OPTIONS]");
    eprintln!();
    eprintln!("  --rounds <n>       Rounds per measurement (default: 10)");
    eprintln!("  --profile <p>      Profile: quick, medium, full (default: medium)");
    eprintln!("  --help             Show this help");
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

    let args: Vec<String> = std::env::args().collect();

    let mut rounds: usize = 10;
    let mut profile = "medium".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rounds" => {
                i += 1;
                if i < args.len() {
                    rounds = args[i].parse().unwrap_or(10);
                }
            }
            "--profile" => {
                i += 1;
                if i < args.len() {
                    profile = args[i].clone();
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown flag: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let cfg = kernel_bench::Config { rounds, profile };
    let results = kernel_bench::run(&cfg);
    harness::print_table(&results);
}
