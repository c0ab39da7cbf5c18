use std::collections::HashMap;

use serde::Serialize;

/// A canonical aspect and how often it was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedAspect {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first_seen: usize,
}

/// Frequency counter that remembers the order terms first appeared in.
#[derive(Debug, Clone, Default)]
pub struct AspectCounter {
    tallies: HashMap<String, Tally>,
    total: usize,
}

impl AspectCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: impl Into<String>) {
        let next = self.tallies.len();
        self.tallies
            .entry(term.into())
            .or_insert(Tally {
                count: 0,
                first_seen: next,
            })
            .count += 1;
        self.total += 1;
    }

    pub fn count(&self, term: &str) -> usize {
        self.tallies.get(term).map_or(0, |t| t.count)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Number of mentions added.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent terms. Ties go to the term seen first.
    pub fn top(&self, n: usize) -> Vec<RankedAspect> {
        let mut entries: Vec<(&String, &Tally)> = self.tallies.iter().collect();
        entries.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });

        entries
            .into_iter()
            .take(n)
            .map(|(term, tally)| RankedAspect {
                term: term.clone(),
                count: tally.count,
            })
            .collect()
    }
}

impl<S: Into<String>> Extend<S> for AspectCounter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, terms: I) {
        for term in terms {
            self.add(term);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for AspectCounter {
    fn from_iter<I: IntoIterator<Item = S>>(terms: I) -> Self {
        let mut counter = Self::new();
        counter.extend(terms);
        counter
    }
}

/// Counts `terms` and returns the `top_n` most frequent.
///
/// Sorted by count descending, then by first occurrence in `terms`. Returns
/// fewer than `top_n` entries when there are fewer distinct terms.
pub fn rank_aspects<I, S>(terms: I, top_n: usize) -> Vec<RankedAspect>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    terms.into_iter().collect::<AspectCounter>().top(top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn terms(ranked: &[RankedAspect]) -> Vec<&str> {
        ranked.iter().map(|r| r.term.as_str()).collect()
    }

    #[test]
    fn most_frequent_first() {
        let ranked = rank_aspects(
            ["camera", "battery", "battery", "screen", "battery", "camera"],
            2,
        );
        assert_eq!(
            ranked,
            vec![
                RankedAspect {
                    term: "battery".into(),
                    count: 3
                },
                RankedAspect {
                    term: "camera".into(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let ranked = rank_aspects(["screen", "camera", "price", "camera", "screen", "price"], 3);
        assert_eq!(terms(&ranked), vec!["screen", "camera", "price"]);
    }

    #[test]
    fn fewer_terms_than_requested() {
        assert_eq!(terms(&rank_aspects(["battery"], 3)), vec!["battery"]);
        assert!(rank_aspects(Vec::<String>::new(), 3).is_empty());
        assert!(rank_aspects(["battery"], 0).is_empty());
    }

    #[test]
    fn counter_tracks_totals() {
        let mut counter = AspectCounter::new();
        counter.extend(["a", "b", "a"]);
        counter.add("c");
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.total(), 4);
        assert_eq!(counter.count("a"), 2);
        assert_eq!(counter.count("z"), 0);
    }

    proptest! {
        #[test]
        fn ranking_is_sorted_and_bounded(
            input in prop::collection::vec("[a-e]", 0..40),
            top_n in 0usize..6,
        ) {
            let ranked = rank_aspects(input.iter().cloned(), top_n);
            prop_assert!(ranked.len() <= top_n);

            let first_index = |term: &str| input.iter().position(|t| t == term);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
                if pair[0].count == pair[1].count {
                    prop_assert!(
                        first_index(pair[0].term.as_str()) < first_index(pair[1].term.as_str())
                    );
                }
            }
            for entry in &ranked {
                let expected = input.iter().filter(|t| **t == entry.term).count();
                prop_assert_eq!(entry.count, expected);
            }
        }
    }
}
