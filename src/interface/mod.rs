pub mod export;
pub mod render;

pub use export::write_stats_csv;
pub use render::{display_meal_stats, render_report};
