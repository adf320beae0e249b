//! Text rendering of items and their progress.

use todolist_core::Percentage;
use todolist_service::TodoItemDto;

/// Width of a progress bar in columns.
pub const BAR_WIDTH: u32 = 50;

/// Render items ordered by id, each followed by one bar per progression
/// showing the running total.
pub fn render_items(items: &[TodoItemDto]) -> String {
    let mut sorted: Vec<&TodoItemDto> = items.iter().collect();
    sorted.sort_by_key(|item| item.id);

    let mut out = String::new();
    for item in sorted {
        out.push_str(&format!(
            "{}) {} - {} ({}) Completed:{}\n",
            item.id, item.title, item.description, item.category, item.is_completed
        ));

        let mut accumulated = Percentage::ZERO;
        for progression in &item.progressions {
            accumulated = accumulated
                .checked_add(progression.percentage)
                .unwrap_or(Percentage::HUNDRED);
            out.push_str(&format!(
                "{} - {}% |{}|\n",
                progression.date.format("%Y-%m-%d"),
                accumulated,
                progress_bar(accumulated)
            ));
        }
    }
    out
}

/// A [`BAR_WIDTH`]-column bar, `O` for filled and space for empty.
pub fn progress_bar(accumulated: Percentage) -> String {
    let full = Percentage::HUNDRED.hundredths();
    let hundredths = accumulated.hundredths().min(full);
    // round half up
    let filled = ((BAR_WIDTH * hundredths + full / 2) / full) as usize;
    format!("{:<width$}", "O".repeat(filled), width = BAR_WIDTH as usize)
}
