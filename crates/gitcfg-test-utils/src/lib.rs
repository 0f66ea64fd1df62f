//! Shared test utilities for the gitcfg workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`git`]: control directory fixtures, from fake layouts to real repositories
//! - [`repo`]: [`repo::TestRepo`] sandbox with a home directory, system config and repository

pub mod git;
pub mod repo;
