//! Each subcommand lives in its own file. The match arm in main stays thin
//! and each handler owns its argument validation and error reporting.

mod export;
mod prune;
mod render;
mod stats;
mod themes;
mod view;

pub use export::cmd_export;
pub use prune::cmd_prune;
pub use render::cmd_render;
pub use stats::cmd_stats;
pub use themes::cmd_themes;
pub use view::cmd_view;
