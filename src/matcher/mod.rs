//! Matching engine
//!
//! Matches partial, mixed-type criteria against a dataset and returns one
//! aggregated row per matching entity.
//!
//! # Pipeline
//!
//! raw criteria → [`CriteriaNormalizer`] → [`PredicateBuilder`] →
//! [`RecordFilter`] → [`GroupAggregator`] → [`OutputAssembler`]
//!
//! # Guarantees
//!
//! - Deterministic: identical inputs give identical tables
//! - Read-only: the dataset is only borrowed
//! - Schema closure: every table, empty or not, has the full output column list
//! - Coercion misses exclude a record silently, they never raise

mod aggregate;
mod assemble;
mod criteria;
mod engine;
mod errors;
mod filter;
mod predicate;
mod schema;

pub use aggregate::GroupAggregator;
pub use assemble::{OutputAssembler, OutputRow, OutputTable};
pub use criteria::{
    CriteriaNormalizer, Criterion, CriterionValue, NormalizedCriteria, RawCriteria, RawValue,
};
pub use engine::{find_matches, Matcher};
pub use errors::{MatchError, MatchErrorCode, MatchResult};
pub use filter::RecordFilter;
pub use predicate::{MatchRule, Predicate, PredicateBuilder, ToleranceBand, LOWER_FACTOR, UPPER_FACTOR};
pub use schema::{
    MatchSchema, ENTITY_COLUMN, INPUT_COLUMNS, OPERATING_COLUMNS, OUTPUT_COLUMNS, PRIMARY_COLUMN,
};
