//! Table-driven scenarios loaded from JSON fixtures.
//!
//! Fixtures live in `tests/fixtures/`:
//! - `tokenize.json` -- token to expected word sequence
//! - `lexical.json` -- word to expected known/unknown outcome
//! - `words.txt` -- the dictionary used by the lexical scenarios

use std::path::PathBuf;

use identspell_en::handle::IdentSpellHandle;
use identspell_en::speller::checker::LexicalChecker;
use identspell_en::speller::wordlist::WordListOracle;
use identspell_en::tokenizer;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TokenizeCase {
    subject: String,
    token: String,
    expected: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LexicalCase {
    subject: String,
    word: String,
    expected: bool,
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_json<T: for<'de> Deserialize<'de>>(name: &str) -> T {
    let path = fixture(name);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

fn dictionary() -> WordListOracle {
    WordListOracle::from_path(fixture("words.txt")).expect("fixture word list")
}

#[test]
fn tokenize_scenarios() {
    let cases: Vec<TokenizeCase> = load_json("tokenize.json");
    assert!(!cases.is_empty());
    for case in cases {
        let actual: Vec<String> = tokenizer::words(&case.token)
            .unwrap_or_else(|e| panic!("{}: {e}", case.subject))
            .into_iter()
            .map(|w| w.into_string())
            .collect();
        assert_eq!(actual, case.expected, "{}", case.subject);
    }
}

#[test]
fn lexical_scenarios() {
    let cases: Vec<LexicalCase> = load_json("lexical.json");
    let dict = dictionary();
    let checker = LexicalChecker::new(&dict);
    for case in cases {
        let actual = checker
            .is_known(&case.word)
            .unwrap_or_else(|e| panic!("{}: {e}", case.subject));
        assert_eq!(actual, case.expected, "{}: {}", case.subject, case.word);
    }
}

#[test]
fn handle_reports_only_long_unknown_words() {
    let handle = IdentSpellHandle::from_word_list_path(fixture("words.txt")).unwrap();
    let source = "\
fn parse(request: Request) -> Response {
    let grapefruits = self.cherries_twirled;
    let hedgehogious_count = HTTPRequestCirlce(0x1F);
}
";
    let flagged: Vec<String> = handle
        .check_text(source)
        .unwrap()
        .into_iter()
        .map(|w| w.into_string())
        .collect();
    assert_eq!(flagged, vec!["parse", "hedgehogious", "count", "cirlce"]);
}

#[test]
fn tokenize_never_invents_or_drops_letters() {
    let cases: Vec<TokenizeCase> = load_json("tokenize.json");
    for case in cases {
        let joined: String = tokenizer::tokenize(&case.token)
            .map(|w| w.unwrap().into_string())
            .collect();
        let letters: String = case
            .token
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        assert_eq!(joined, letters, "{}", case.subject);
    }
}
