//! Fixed spellings: each row names a tag and the exact parts of the word

use super::SplitRules;
use crate::error::Result;
use crate::tables::{rows, SIMPLE_SPLITS_FILE};

pub(super) fn register(rules: &mut SplitRules, content: &str) -> Result<()> {
    for row in rows(SIMPLE_SPLITS_FILE, content, &[3, 4])? {
        let (pos, words) = (row[0], &row[1..]);
        let pattern: String = words
            .iter()
            .enumerate()
            .map(|(i, word)| format!("(?P<word{}>{})", i + 1, regex::escape(word)))
            .collect();
        let template = (1..=words.len())
            .map(|i| format!("${{word{i}}}"))
            .collect::<Vec<_>>()
            .join(" ");
        rules.add(pos, &format!("^{pattern}$"), &template)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_three_and_four_columns() {
        let mut rules = SplitRules::default();
        register(&mut rules, "; tag, parts\nA~B\tab\tc\nA~B~C\ta\tb\tc\n").unwrap();
        assert_eq!(
            rules.split_word("A~B", "abc"),
            Some(vec!["ab".to_string(), "c".to_string()])
        );
        assert_eq!(
            rules.split_word("A~B~C", "abc"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(rules.split_word("A~B", "abcd"), None);
    }

    #[test]
    fn test_words_are_literal() {
        let mut rules = SplitRules::default();
        register(&mut rules, "A~B\ta.\tb\n").unwrap();
        assert_eq!(rules.split_word("A~B", "axb"), None);
        assert!(rules.split_word("A~B", "a.b").is_some());
    }

    #[test]
    fn test_bad_row() {
        let mut rules = SplitRules::default();
        assert!(matches!(
            register(&mut rules, "A~B\tab\n"),
            Err(CoreError::TableFormat { expected: "3 or 4", .. })
        ));
    }
}
