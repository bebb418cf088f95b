//! The error contract shared by every generated module.
//!
//! `support.rs` is compiled here so the contract is checked and tested like
//! any other code, and the same text is emitted into generated modules by
//! [`crate::compose`]. It must only rely on the imports below and on the
//! `http` crate.

use std::{backtrace::Backtrace, error::Error as StdError, fmt};

include!("support.rs");
