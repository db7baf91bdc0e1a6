//! Concrete game implementations of `RulesEngine`.

pub mod snap;
