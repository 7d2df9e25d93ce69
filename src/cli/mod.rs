//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line interface for playing against the
//! engine, analyzing positions, and exporting the solved policy.

pub mod commands;
pub mod output;
