//! Domain layer: view models, raw row contracts and the shaping rules between them.
//!
//! This module has no knowledge of HTTP or of how rows are fetched. The
//! repository trait describes what a page needs from the `dpi_202412` table;
//! the shaping functions turn whatever the engine returned into
//! null-normalized view models.
//!
//! # Architecture
//!
//! - [`views`] - Request-scoped view models handed to the presentation layer
//! - [`repositories`] - Data access trait and the raw rows it yields
//! - [`shaping`] - Pure coercion, code normalization and output capping

pub mod repositories;
pub mod shaping;
pub mod views;
