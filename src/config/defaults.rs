// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Visible-toast ceiling per position group
//! - **Timing**: Auto-dismiss duration and transition delays
//! - **Expand**: Long-message threshold and toggle labels

use std::time::Duration;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default maximum number of toasts visible at once in one position group.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Smallest accepted ceiling. A ceiling of zero would queue forever.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss duration (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Delay between a toast being inserted and its countdown starting.
pub const SHOW_DELAY: Duration = Duration::from_millis(100);

/// Grace delay before a user-closed toast starts leaving.
pub const USER_CLOSE_GRACE: Duration = Duration::from_millis(200);

/// Exit transition length between hiding a toast and removing it.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

// ==========================================================================
// Expand/Collapse Defaults
// ==========================================================================

/// Messages strictly longer than this (in characters) get an expand toggle.
pub const READ_MORE_THRESHOLD_CHARS: usize = 100;

/// Default label of the expand toggle while collapsed.
pub const DEFAULT_READ_MORE_TEXT: &str = "Read more";

/// Default label of the expand toggle while expanded.
pub const DEFAULT_READ_LESS_TEXT: &str = "Read less";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_VISIBLE_TOASTS > 0);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS >= MIN_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(READ_MORE_THRESHOLD_CHARS > 0);
};
