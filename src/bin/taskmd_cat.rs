use std::error::Error;
use std::io::Write;

use taskmd_input::{parse_manual, resolver_from_args};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  taskmd_cat [--stdin] [-v|--verbose] [--config <path>] [file]");
    eprintln!();
    eprintln!("Input selection:");
    eprintln!("  --stdin            Read from stdin, ignoring [file]");
    eprintln!("  [file]             Read the given file");
    eprintln!("  (neither)          Read tasks.md in the current directory");
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_manual(std::env::args().skip(1))?;
    let resolver = resolver_from_args(&args);

    let content = resolver.read_all(args.positional())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&content)?;
    stdout.flush()?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("taskmd_cat error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
