//! Reference word sets.
//!
//! Abbreviations for sentence splitting and the easy-word list for
//! difficult-word classification.

pub mod abbreviations;
pub mod dale_chall;

pub use dale_chall::EasyWords;
