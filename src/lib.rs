//! Sitecore provisioning engine.
//!
//! Reads a list of component definitions (the `sitecore-template.json`
//! produced alongside a generated design) and creates the matching Sitecore
//! items through the authoring GraphQL API: templates, template sections and
//! fields, data folder templates and items, renderings, sample content and a
//! final Page Data item.
//!
//! The public API is organised into these layers:
//!
//! - **[`config`]**: settings resolution and definition loading/validation
//! - **[`naming`]**: identifier formatting and item name normalization
//! - **[`remote`]**: the [`remote::ItemClient`] seam and its GraphQL, dry-run
//!   and run-log pieces
//! - **[`resources`]**: one builder per kind of created item
//! - **[`provision`]**: tree orchestration and run aggregation
//! - **[`commands`]**: top-level subcommands (`import`, `validate`, …)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod naming;
pub mod provision;
pub mod remote;
pub mod resources;
