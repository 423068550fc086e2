// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the toast widget and the demo window.

pub mod button;
pub mod tooltip;
