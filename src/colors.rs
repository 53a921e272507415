//! Colour palette for task and stage status.

use ratatui::style::Color;

use crate::fields::{StageStatus, Status};

/// Used for Required
pub const SLATE: Color = Color::Rgb(100, 116, 139);
/// Used for Not Required
pub const LIGHT_GREY: Color = Color::Rgb(203, 213, 225);
/// Used for Pending
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for Complete
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
/// Used for Needs Action
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Used for stages in progress
pub const OCEAN: Color = Color::Rgb(37, 99, 235);

/// Bar colour for a task status.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Required => SLATE,
        Status::NotRequired => LIGHT_GREY,
        Status::Pending => GOLD,
        Status::Complete => DARK_GREEN,
        Status::NeedsAction => DARK_RED,
    }
}

/// Badge colour for a stage roll-up.
pub fn stage_status_color(status: StageStatus) -> Color {
    match status {
        StageStatus::Required => SLATE,
        StageStatus::InProgress => OCEAN,
        StageStatus::Complete => DARK_GREEN,
    }
}

/// `#rrggbb` for RGB colours, the lower-case colour name otherwise.
pub fn color_hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        other => format!("{other:?}").to_lowercase(),
    }
}
