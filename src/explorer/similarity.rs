// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Naive fuzzy matching between a query and a destination name.

/// How closely a query resembles a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Similarity {
    /// One string contains the other. The best possible score.
    Contains,
    /// Length in characters of the shared leading run.
    LeadingRun(usize),
}

impl Similarity {
    /// Compares a query with a name, case-insensitively.
    pub fn between(query: &str, name: &str) -> Self {
        let query = query.to_lowercase();
        let name = name.to_lowercase();

        if query.contains(&name) || name.contains(&query) {
            return Self::Contains;
        }

        let run = query
            .chars()
            .zip(name.chars())
            .take_while(|(a, b)| a == b)
            .count();
        Self::LeadingRun(run)
    }

    /// Ranking score: 0 for containment, otherwise the leading run length.
    pub fn score(&self) -> usize {
        match self {
            Self::Contains => 0,
            Self::LeadingRun(run) => *run,
        }
    }

    /// Whether the match is good enough to report. Containment always
    /// qualifies; a leading run needs at least `min_run` characters.
    pub fn qualifies(&self, min_run: usize) -> bool {
        match self {
            Self::Contains => true,
            Self::LeadingRun(run) => *run >= min_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("goa", "Goa", Similarity::Contains ; "exact")]
    #[test_case("trip to goa", "Goa", Similarity::Contains ; "query contains name")]
    #[test_case("jai", "Jaipur", Similarity::Contains ; "name contains query")]
    #[test_case("udaypur", "Udaipur", Similarity::LeadingRun(3) ; "misspelling")]
    #[test_case("xyz", "Goa", Similarity::LeadingRun(0) ; "unrelated")]
    fn test_between(query: &str, name: &str, expected: Similarity) {
        assert_eq!(Similarity::between(query, name), expected);
    }

    #[test]
    fn test_qualification_threshold() {
        assert!(Similarity::Contains.qualifies(2));
        assert_eq!(Similarity::Contains.score(), 0);
        assert!(Similarity::LeadingRun(2).qualifies(2));
        assert!(!Similarity::LeadingRun(1).qualifies(2));
        assert_eq!(Similarity::LeadingRun(4).score(), 4);
    }
}
