//! Graph algorithms
//! Copyright (c) 2025 Theo Marchal <theo.marchal@posteo.net>

pub mod matching;

pub use self::matching::{
    find_maximum_matching, MatchingResult, MatchingStatistics, MaximumMatching,
};
