//! Independent result validation

pub mod correctness;

pub use self::correctness::{
    exhaustive_maximum_matching_size, validate_matching, ValidationError,
};
