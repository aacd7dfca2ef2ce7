// identspell-tokenize: Show how tokens are split into words.
//
// Reads text from stdin and prints, for each whitespace-delimited token,
// the words the tokenizer produces. Words that would be dictionary-checked
// (five letters or more) are marked with `*`.
//
// Usage:
//   identspell-tokenize < file

use std::io::{self, BufRead, Write};
use std::process;

use identspell_core::enums::MIN_CHECKED_WORD_LEN;
use identspell_en::tokenizer;

fn main() {
    if std::env::args().skip(1).any(|a| a == "--help" || a == "-h") {
        println!("identspell-tokenize: Show how identifier tokens split into words.");
        println!();
        println!("Usage: identspell-tokenize < FILE");
        println!();
        println!("Prints one line per token:  <token>: word word* ...");
        println!("Words marked with * are long enough to be dictionary-checked.");
        return;
    }

    identspell_cli::init_tracing(0);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                process::exit(2);
            }
        };
        for token in line.split_whitespace() {
            let words = match tokenizer::words(token) {
                Ok(w) => w,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(2);
                }
            };
            let rendered: Vec<String> = words
                .iter()
                .map(|w| {
                    if w.len() >= MIN_CHECKED_WORD_LEN {
                        format!("{w}*")
                    } else {
                        w.to_string()
                    }
                })
                .collect();
            let _ = writeln!(out, "{token}: {}", rendered.join(" "));
        }
    }
}
