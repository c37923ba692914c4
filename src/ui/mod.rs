/// Browser-facing features of the directory layer

pub mod analytics;
pub mod animator;
pub mod app;
pub mod components;
pub mod context;
pub mod keyboard;
pub mod page;
pub mod preferences;
pub mod search;
pub mod styles;
pub mod theme;
pub mod tooltip;

pub use app::Directory;
