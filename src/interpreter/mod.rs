//! Command execution
//!
//! This module provides the execution half of the pipeline:
//! - [`engine`]: the streaming [`engine::Interpreter`] and the
//!   [`engine::run_session`] convenience entry point
//! - [`errors`]: [`errors::RuntimeError`] and [`errors::SessionError`]

pub mod engine;
pub mod errors;
