//! Upstream service clients and view composition.
//!
//! Services contain the outbound-call logic separated from HTTP handlers:
//! talking to the bank backends and assembling the aggregated home view.

pub mod aggregator;
pub mod backend;
