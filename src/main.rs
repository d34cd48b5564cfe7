mod error;
mod layout;
mod machine;
mod report;


#[macro_use]
extern crate static_assertions;

use std::io::{self, Write};
use std::process::{abort, exit};

use crate::{error::SizeError, layout::Layout, report::Report};

use clap::Parser;

/// Checks that int and unsigned int are 4 bytes and that ptrdiff_t matches
/// the pointer size (4 or 8 bytes). Aborts if any of this does not hold.
#[derive(Parser)]
#[command(name = "assert-sizes")]
struct Cli {
    /// Print the layout and every failed assertion
    #[arg(short, long)]
    verbose: bool,

    /// Print a JSON report
    #[arg(long)]
    json: bool,
}

/// Prints whatever `cli` asks for, then reports the first failed assertion
/// on `err`. The outer error is an output failure.
fn run<O: Write, E: Write>(
    cli: &Cli,
    layout: &Layout,
    out: &mut O,
    err: &mut E,
) -> io::Result<Result<(), SizeError>> {
    if cli.verbose {
        writeln!(out, "========== LAYOUT ===========")?;
        writeln!(out, "{}", layout)?;
        writeln!(out, "========== CHECK ===========")?;
        let violations = layout.violations();
        for e in &violations {
            writeln!(out, "error: {}", e.diagnostic())?;
        }
        if violations.is_empty() {
            writeln!(out, "all assertions hold")?;
        }
    }

    if cli.json {
        Report::new(layout).write_json(&mut *out)?;
        writeln!(out)?;
    }

    let result = layout.check();
    if let Err(e) = result {
        writeln!(err, "assertion failed: {}", e.diagnostic())?;
    }
    Ok(result)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli, &Layout::HOST, &mut io::stdout(), &mut io::stderr()) {
        Ok(Ok(())) => (),
        Ok(Err(_)) => abort(),
        Err(e) => {
            eprintln!("Cannot write output: {}", e);
            exit(1);
        }
    }
}
