//! Lexical rule sets and the per-line tokenizer.
//!
//! Two rule sets exist: the generic-source set for headers, sources, and
//! build files (identifiers plus numeric literals) and the block/script
//! set for `.blk`/`.nut` files (identifiers with internal hyphens).
//!
//! Matching is two-step: a compiled pattern finds candidates, then a
//! boundary pass enforces word-boundary discipline, so no reported token
//! is a strict substring of a larger identifier-shaped run. The boundary
//! pass also handles quoted forms: a candidate immediately preceded by a
//! double quote is kept only when immediately followed by one, and the
//! quotes are never part of the token.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Which lexical rule set applies to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    /// Headers, sources, build files: identifiers and numeric literals.
    Generic,
    /// `.blk` / `.nut` files: hyphen-joined identifiers.
    Block,
}

// Alternatives are ordered longest-form-first so the leftmost-first
// engine prefers an exponent over a float over a plain integer starting
// at the same position. Octal literals are a leading-0 subset of the
// decimal digit run and need no alternative of their own.
const GENERIC_PATTERN: &str = r"(?x)
      [A-Za-z_][A-Za-z0-9_]*                                            # identifier
    | (?: [0-9]+ \. [0-9]* | \. [0-9]+ | [0-9]+ ) [eE] [+-] [0-9]+      # exponent, sign mandatory
    | [0-9]+ \. [0-9]*                                                  # float, digits before the point
    | \. [0-9]+                                                         # float, digits after the point
    | (?: 0[xX][0-9A-Fa-f]+ | [0-9]+ )
      (?: [uU][lL]{0,2} | [lL]{1,2}[uU]? )?                             # integer with u/l suffixes
";

// Segments start with a letter or underscore; a single hyphen may join
// two segments into one token (`foo-bar`).
const BLOCK_PATTERN: &str = r"[A-Za-z_][A-Za-z0-9_]*(?:-[A-Za-z_][A-Za-z0-9_]*)*";

fn generic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GENERIC_PATTERN).expect("generic rule set pattern"))
}

fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BLOCK_PATTERN).expect("block rule set pattern"))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Extract the distinct tokens on one line under the given rule set.
///
/// Pure and deterministic; an empty line yields an empty set, and
/// repeated tokens within the line collapse to one entry.
pub fn tokenize(line: &str, rule_set: RuleSet) -> FxHashSet<String> {
    let re = match rule_set {
        RuleSet::Generic => generic_regex(),
        RuleSet::Block => block_regex(),
    };

    let mut tokens = FxHashSet::default();
    for m in re.find_iter(line) {
        let text = m.as_str();
        let before = line[..m.start()].chars().next_back();
        let after = line[m.end()..].chars().next();

        // Reject candidates that sit inside a larger identifier-shaped
        // run on either side.
        let first = text.chars().next();
        let last = text.chars().next_back();
        if before.is_some_and(is_word_char) && first.is_some_and(is_word_char) {
            continue;
        }
        if after.is_some_and(is_word_char) && last.is_some_and(is_word_char) {
            continue;
        }

        // An opening quote must be mirrored by a closing quote, so half
        // of a quoted phrase never matches on its own.
        if before == Some('"') && after != Some('"') {
            continue;
        }

        tokens.insert(text.to_owned());
    }
    tokens
}
