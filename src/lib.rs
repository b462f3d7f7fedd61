// Idiom benchmarks
//
// Two suites of timed loops comparing coding idioms:
// - `trials`: string concatenation, byte extraction, scanning loops,
//   field access and keyed-container capacity tuning, run in a fixed order
//   by `driver`.
// - `dispatch`: by-value parameter reassignment across call paths and
//   inlining eligibility.
//
// Every trial returns an accumulated scalar whose only purpose is to keep
// the idiom under test from being optimized away.

pub mod buffer;
pub mod context;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod store;
pub mod trials;

pub use context::TrialContext;
pub use error::{BenchError, BenchResult};
