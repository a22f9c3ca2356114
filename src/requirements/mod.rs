//! Package detection and installation.
//!
//! This module provides the pieces of the provisioning pipeline that deal
//! with a single package: name resolution, presence checks, and
//! installation with fallback strategies.
//!
//! # Modules
//!
//! - [`alias`] - Installable name to import name mapping
//! - [`manifest`] - The ordered list of required packages
//! - [`strategy`] - Installation strategy templates
//! - [`checker`] - Presence checks through the interpreter
//! - [`installer`] - Installation with per-strategy fallback
//! - [`context`] - Mockable process execution

pub mod alias;
pub mod checker;
pub mod context;
pub mod installer;
pub mod manifest;
pub mod strategy;

pub use alias::AliasTable;
pub use checker::PresenceChecker;
pub use context::{default_context, ExecContext};
pub use installer::{AttemptOutcome, AttemptRecord, InstallReport, Installer};
pub use manifest::{Manifest, DEFAULT_PACKAGES};
pub use strategy::{builtin_strategies, InstallStrategy, PACKAGE_PLACEHOLDER};
