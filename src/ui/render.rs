//! Plain-text rendering of the category snapshot.

use std::fmt::Write;

use crate::ui::category::{CategoryViewState, LoadPhase};

pub const TITLE: &str = "Categories";

/// Render a snapshot as a heading followed by one category name per line.
pub fn render(state: &CategoryViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);

    for category in &state.categories {
        let _ = writeln!(out, "  {}", category.name);
    }

    match &state.phase {
        LoadPhase::Loading => {
            let _ = writeln!(out, "  Loading...");
        }
        LoadPhase::Loaded if state.categories.is_empty() => {
            let _ = writeln!(out, "  (no categories)");
        }
        LoadPhase::Loaded => {}
        LoadPhase::Failed { message, .. } => {
            let _ = writeln!(out, "  Failed to load categories: {}", message);
        }
    }

    out
}
