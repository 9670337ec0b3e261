//! diary - Personal mood diary for the terminal
//!
//! Users register and log in, then write dated entries tagged with an
//! emotion and look them up by date. Everything lives in memory for the
//! lifetime of one interactive session.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
