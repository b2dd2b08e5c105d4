use std::error::Error;
use std::io::Write;

use taskmd_input::{InputArgs, resolver_from_args};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  taskmd_sarge [--stdin] [-v|--verbose] [--config <path>] [file]");
}

fn run() -> Result<(), Box<dyn Error>> {
    let argv: Vec<String> = std::env::args().collect();
    let args = InputArgs::from_sarge(&argv)?;
    let resolver = resolver_from_args(&args);

    let content = resolver.read_all(args.positional())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&content)?;
    stdout.flush()?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("taskmd_sarge error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
