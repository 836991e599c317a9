//! Core library for the `seqprobe` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, the sequential probe loop, latency
//! statistics, and chart rendering. The primary user-facing interface is the
//! `seqprobe` command-line application.
pub mod args;
pub mod charts;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
