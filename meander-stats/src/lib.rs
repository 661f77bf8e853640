//! Derived statistics for random-walk and waiting-time experiments.
//!
//! Everything here is a pure function over already-materialized batches or
//! sequences; nothing draws randomness, caches, or holds shared state.
//! Results are recomputed fresh on every call.
//!
//! - [`mean_square_displacement`] — mean squared end-to-end distance over a
//!   batch of walks
//! - [`fit_proportionality`] — least-squares slope of a line forced through
//!   the origin
//! - [`waiting_time_summary`] — empirical waiting-time statistics next to
//!   their geometric and exponential predictions
//! - [`Histogram`] — binned counts for an external renderer
//! - [`mean`] / [`std_dev`] — the descriptive statistics the above build on

mod descriptive;
mod displacement;
mod fit;
mod histogram;
mod waiting;

pub use descriptive::{mean, std_dev};
pub use displacement::{EmptyBatchError, mean_square_displacement};
pub use fit::{FitError, fit_proportionality};
pub use histogram::{Histogram, HistogramError};
pub use waiting::{ProbabilityError, WaitingTimeSummary, waiting_time_summary};
