//! Classifier tables.
//!
//! Static spelling-to-token mappings for operators, separators and
//! keywords. Each table is built on first use and never mutated
//! afterwards, so any number of lexers on any number of threads may read
//! them concurrently.
//!
//! Initialization is lazy: the first lookup builds the table it touches.
//! Call [`init`] to build all three up front, for example before spawning
//! worker threads, so the one-time cost is not paid inside a timed region.

use lazy_static::lazy_static;
use micac_util::FxHashMap;
use tracing::debug;

use crate::token::{Keyword, Operator, Separator};

lazy_static! {
    static ref OPERATORS: FxHashMap<&'static str, Operator> = {
        let table: FxHashMap<_, _> = Operator::ALL.iter().map(|&op| (op.as_str(), op)).collect();
        debug!(entries = table.len(), "built operator table");
        table
    };
    static ref SEPARATORS: FxHashMap<char, Separator> = {
        let table: FxHashMap<_, _> = Separator::SPELLED
            .iter()
            .filter_map(|&sep| sep.as_char().map(|c| (c, sep)))
            .collect();
        debug!(entries = table.len(), "built separator table");
        table
    };
    static ref KEYWORDS: FxHashMap<&'static str, Keyword> = {
        let table: FxHashMap<_, _> = Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)).collect();
        debug!(entries = table.len(), "built keyword table");
        table
    };
    static ref MAX_OPERATOR_LENGTH: usize = OPERATORS.keys().map(|s| s.len()).max().unwrap_or(0);
}

/// Build every classifier table now instead of on first lookup.
///
/// Calling this more than once is harmless.
pub fn init() {
    lazy_static::initialize(&OPERATORS);
    lazy_static::initialize(&SEPARATORS);
    lazy_static::initialize(&KEYWORDS);
    lazy_static::initialize(&MAX_OPERATOR_LENGTH);
}

/// Length in bytes of the longest operator spelling.
pub fn max_operator_length() -> usize {
    *MAX_OPERATOR_LENGTH
}

/// Match the operator at the start of `text`.
///
/// Longer spellings are tried first, so an operator always wins over any
/// operator that is a prefix of it. Returns the operator and the number of
/// bytes it covers.
///
/// # Example
///
/// ```
/// use micac_lex::tables::lookup_operator;
/// use micac_lex::token::Operator;
///
/// assert_eq!(lookup_operator("= 3;"), Some((Operator::Assign, 1)));
/// assert_eq!(lookup_operator("a"), None);
/// ```
pub fn lookup_operator(text: &str) -> Option<(Operator, usize)> {
    (1..=max_operator_length()).rev().find_map(|len| {
        let spelling = text.get(..len)?;
        OPERATORS.get(spelling).map(|&op| (op, len))
    })
}

/// Look up the separator spelled by `c`.
pub fn lookup_separator(c: char) -> Option<Separator> {
    SEPARATORS.get(&c).copied()
}

/// Look up the keyword spelled exactly `text`.
pub fn lookup_keyword(text: &str) -> Option<Keyword> {
    KEYWORDS.get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert_eq!(max_operator_length(), 1);
    }

    #[test]
    fn test_every_operator_round_trips() {
        for op in Operator::ALL {
            assert_eq!(lookup_operator(op.as_str()), Some((op, op.as_str().len())));
        }
    }

    #[test]
    fn test_every_separator_round_trips() {
        for sep in Separator::SPELLED {
            let c = sep.as_char().unwrap();
            assert_eq!(lookup_separator(c), Some(sep));
        }
    }

    #[test]
    fn test_tables_share_util_hash_map() {
        let keywords: &micac_util::FxHashMap<&'static str, Keyword> = &KEYWORDS;
        assert_eq!(keywords.len(), Keyword::ALL.len());
        let separators: &micac_util::FxHashMap<char, Separator> = &SEPARATORS;
        assert_eq!(separators.len(), Separator::SPELLED.len());
    }

    #[test]
    fn test_end_of_program_is_not_spelled() {
        assert!(!SEPARATORS.values().any(|&s| s == Separator::EndOfProgram));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lookup_keyword("if"), Some(Keyword::If));
        assert_eq!(lookup_keyword("else"), Some(Keyword::Else));
        assert_eq!(lookup_keyword("return"), Some(Keyword::Return));
        assert_eq!(lookup_keyword("func"), Some(Keyword::Func));
        assert_eq!(lookup_keyword("If"), None);
        assert_eq!(lookup_keyword("iff"), None);
    }

    #[test]
    fn test_operator_lookup_only_reads_prefix() {
        assert_eq!(lookup_operator("+1"), Some((Operator::Plus, 1)));
        assert_eq!(lookup_operator("//"), Some((Operator::Divide, 1)));
        assert_eq!(lookup_operator(""), None);
        assert_eq!(lookup_operator("é"), None);
    }

    #[test]
    fn test_concurrent_lookups() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..100).all(|_| lookup_keyword("func") == Some(Keyword::Func))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
