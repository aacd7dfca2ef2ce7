// identspell: Flag likely-misspelled words inside identifiers.
//
// Splits every whitespace-delimited token of the given files into words
// (snake_case, camelCase, PascalCase, SCREAMING_CASE), skips words shorter
// than five letters and prints each word the dictionary does not know:
//   Check "<word>".
//
// Usage:
//   identspell [-d WORDS] [--look] [OPTIONS] <PATH>...
//
// Exit status: 0 on success, 1 with --fail-on-unknown when anything was
// flagged, 2 on error.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use identspell_cli::Args;

fn main() {
    let args = Args::parse();
    identspell_cli::init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let flagged = match identspell_cli::run(&args, &mut out) {
        Ok(n) => n,
        Err(e) => {
            let _ = out.flush();
            eprintln!("error: {e}");
            process::exit(2);
        }
    };
    if let Err(e) = out.flush() {
        eprintln!("error: failed to write report: {e}");
        process::exit(2);
    }

    if args.fail_on_unknown && flagged > 0 {
        process::exit(1);
    }
}
