// SPDX-License-Identifier: MPL-2.0
//! `device_stage` is a small playground built with the Iced GUI framework.
//!
//! It recreates two classic creative-coding samples on the desktop: a
//! keyboard demo that forwards text-field edits into a key-event log next
//! to a spinning gradient square, and an orientation demo that animates an
//! interface rectangle through simulated device rotations.

pub mod app;
pub mod config;
pub mod error;
pub mod orientation;
pub mod ui;
