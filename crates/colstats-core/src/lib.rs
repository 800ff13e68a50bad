//! Core types and moment estimators for column statistics
//!
//! This crate holds the pieces every other colstats crate builds on: the
//! shared [`Error`] type, the dynamic cell [`Value`], the [`AsNumeric`] bound
//! and the two moment functions.
//!
//! # Example
//!
//! ```rust
//! use colstats_core::{compute_average, compute_std_dev, Value};
//!
//! let data = vec![10, 20, 30];
//! let mean = compute_average(&data).unwrap();
//! let std_dev = compute_std_dev(&data, mean).unwrap();
//! assert_eq!(mean, 20.0);
//!
//! // Dynamic cells are rejected when they are not numeric
//! let cells = vec![Value::from(1), Value::from("oops")];
//! assert!(compute_average(&cells).is_err());
//! # let _ = std_dev;
//! ```

pub mod error;
pub mod moments;
pub mod value;

pub use error::{Error, Result};
pub use moments::{compute_average, compute_std_dev};
pub use value::{drop_missing, to_numbers, AsNumeric, Value};
