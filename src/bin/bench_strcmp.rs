//! String comparison: strcmp vs. prefix filtering vs. djb2 hashing.
//!
//! ```text
//! cargo run --release --bin bench_strcmp
//! ```

use cyclebench::cli::{self, Bench};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cyclebench::init_tracing();

    let matches = cli::command(Bench::Strcmp).get_matches();
    let config = cli::config_from_matches(Bench::Strcmp, &matches)?;

    let document = cyclebench::strcmp_document(&config)?;
    let stdout = std::io::stdout();
    document.render(config.format, &mut stdout.lock())?;

    Ok(())
}
