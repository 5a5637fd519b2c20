// SPDX-License-Identifier: MPL-2.0
//! UI layer: the two sample screens and the design tokens they share.

pub mod design_tokens;
pub mod keyboard_screen;
pub mod orientation_screen;
