//! General-purpose counting capabilities.

use counter::Counter;

/// A pair of keyword and occurrence count.
pub type KeywordCount = (String, usize);

/// Counts how often a fixed set of keywords appears in post titles.
///
/// The keyword set is fixed when the counter is created: titles are
/// tokenized and each token that exactly matches a keyword bumps that
/// keyword's count, but tokens outside the set are ignored. Matching is
/// case-insensitive and substring-free; "catalog" never counts toward
/// "cat".
#[derive(Debug)]
pub struct KeywordCounter {
    counts: Counter<String>,
}

impl KeywordCounter {
    /// Creates a counter for the given keywords, each starting at zero.
    ///
    /// Keywords are lower-cased, so duplicates that differ only by case
    /// collapse to a single entry.
    pub fn from_keywords<I>(keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counts = Counter::new();
        for keyword in keywords {
            counts.entry(keyword.as_ref().to_lowercase()).or_insert(0);
        }
        KeywordCounter { counts }
    }

    /// Folds one title into the counter.
    ///
    /// The title is lower-cased and split on whitespace, every
    /// non-alphanumeric character is stripped from each token, and every
    /// resulting token that matches a keyword increments that keyword's
    /// count by one.
    pub fn tally(&mut self, title: &str) {
        for token in Self::tokenize(title) {
            if let Some(count) = self.counts.get_mut(&token) {
                *count += 1;
            }
        }
    }

    /// The sorted, non-zero counts.
    ///
    /// Entries are ordered by count, descending, with ties broken by
    /// keyword, ascending. Keywords that were never seen are omitted, so
    /// a counter that matched nothing reports an empty list.
    pub fn report(&self) -> Vec<KeywordCount> {
        self.counts
            .most_common_tiebreaker(Ord::cmp)
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    fn tokenize(title: &str) -> impl Iterator<Item = String> {
        title
            .to_lowercase()
            .split_whitespace()
            .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect())
            .collect::<Vec<String>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counts(pairs: &[(&str, usize)]) -> Vec<KeywordCount> {
        pairs
            .iter()
            .map(|(keyword, count)| ((*keyword).to_string(), *count))
            .collect()
    }

    #[test]
    fn it_reports_nothing_before_any_titles_are_tallied() {
        let counter = KeywordCounter::from_keywords(["cat", "dog"]);
        assert_eq!(counter.report(), vec![]);
    }

    #[test]
    fn it_counts_keywords_case_insensitively() {
        let mut counter = KeywordCounter::from_keywords(["cat", "dog"]);
        counter.tally("A CAT and a Dog");
        assert_eq!(counter.report(), counts(&[("cat", 1), ("dog", 1)]));
    }

    #[test]
    fn it_collapses_duplicate_keywords() {
        let mut counter = KeywordCounter::from_keywords(["cat", "Cat", "CAT"]);
        counter.tally("one cat");
        assert_eq!(counter.report(), counts(&[("cat", 1)]));
    }

    #[test]
    fn it_strips_punctuation_from_tokens() {
        let mut counter = KeywordCounter::from_keywords(["dog"]);
        counter.tally("dog, dog! (dog)");
        assert_eq!(counter.report(), counts(&[("dog", 3)]));
    }

    #[test]
    fn it_does_not_match_substrings() {
        let mut counter = KeywordCounter::from_keywords(["cat"]);
        counter.tally("a catalog of concatenated cats");
        assert_eq!(counter.report(), vec![]);
    }

    #[test]
    fn it_ignores_tokens_that_are_not_keywords() {
        let mut counter = KeywordCounter::from_keywords(["cat"]);
        counter.tally("no match here");
        assert_eq!(counter.report(), vec![]);
    }

    #[test]
    fn it_sorts_by_count_and_breaks_ties_alphabetically() {
        let mut counter = KeywordCounter::from_keywords(["ant", "bee", "cow"]);
        counter.tally("cow cow bee ant");
        counter.tally("bee cow");
        assert_eq!(
            counter.report(),
            counts(&[("cow", 3), ("bee", 2), ("ant", 1)])
        );
    }

    #[test]
    fn it_sorts_tied_counts_alphabetically() {
        let mut counter = KeywordCounter::from_keywords(["dog", "cat"]);
        counter.tally("a cat and a dog");
        assert_eq!(counter.report(), counts(&[("cat", 1), ("dog", 1)]));
    }

    #[test]
    fn it_omits_keywords_that_were_never_seen() {
        let mut counter = KeywordCounter::from_keywords(["cat", "yeti"]);
        counter.tally("cat cat cat");
        assert_eq!(counter.report(), counts(&[("cat", 3)]));
    }

    #[test]
    fn it_accumulates_across_multiple_titles() {
        let mut counter = KeywordCounter::from_keywords(["rust"]);
        counter.tally("Rust 1.88 released");
        counter.tally("Why Rust?");
        counter.tally("completely unrelated");
        assert_eq!(counter.report(), counts(&[("rust", 2)]));
    }
}
