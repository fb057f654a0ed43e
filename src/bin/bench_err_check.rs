//! Error checking: branches vs. bit operations.
//!
//! Times five equivalent shapes of the same six-predicate envelope check.
//!
//! ```text
//! cargo run --release --bin bench_err_check
//! cargo run --release --features valid-inputs --bin bench_err_check
//! ```

use cyclebench::cli::{self, Bench};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cyclebench::init_tracing();

    let matches = cli::command(Bench::ErrCheck).get_matches();
    let config = cli::config_from_matches(Bench::ErrCheck, &matches)?;

    let document = cyclebench::err_check_document(&config)?;
    let stdout = std::io::stdout();
    document.render(config.format, &mut stdout.lock())?;

    Ok(())
}
