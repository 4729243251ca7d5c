//! Pipeline orchestration.
//!
//! [`UrlValidator`] sequences the stages for one (query, URL) pair:
//!
//! 1. **Fetch** page text (never fails; failures yield `""`).
//! 2. **Score** relevance and bias independently.
//! 3. **Aggregate** into a [`ValidityReport`](crate::scoring::ValidityReport).
//! 4. **Report**, or return [`Evaluation::Errored`] if any stage raised.
//!
//! There is no partial report and no retry.

pub mod error;
pub mod pairs;
pub mod types;
pub mod validator;


pub use error::{LoadError, PairsError};
pub use pairs::{QueryUrlPair, parse_pairs, read_pairs};
pub use types::{
    BIAS_FIELD, ERROR_FIELD, Evaluation, EvaluationRecord, FINAL_FIELD, RELEVANCE_FIELD,
};
pub use validator::{DefaultValidator, UrlValidator};
