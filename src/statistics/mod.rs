//! Statistical primitives for the sampling engine.
//!
//! This module provides the closed-form probability mathematics the four
//! components are built on:
//! - Standard-normal quantiles for arbitrary confidence levels
//! - Wilson-score confidence intervals for binomial proportions

mod normal;
mod wilson;

pub use normal::quantile_normal;
pub use wilson::{wilson_interval, ConfidenceInterval};
