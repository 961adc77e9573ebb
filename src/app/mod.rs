pub mod clipboard;
pub mod error;
pub mod event_async_task_manager;
pub mod event_msg;
pub mod event_sync_subscriptions;
pub mod logger;
pub mod program;
pub mod tea_model;
pub mod tea_update;
pub mod tea_view;
pub mod terminal;
pub mod ui_components;

pub use program::Program;
pub use tea_model::{FiletreeConfig, FiletreeMode, Model};
