pub mod app;
pub mod config;
pub mod display;
pub mod errors;
pub mod feed;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod shows;
pub mod state;
pub mod storage;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use feed::{ActivityFeedModel, DailyActivity, FeedCounts, FilterSelection, Icon, RecentCommit};
pub use state::AppState;
pub use storage::load_activities;
