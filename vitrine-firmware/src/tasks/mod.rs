//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod controller;
pub mod tick;
pub mod time_sync;

pub use buttons::buttons_task;
pub use controller::controller_task;
pub use tick::tick_task;
pub use time_sync::time_sync_task;
