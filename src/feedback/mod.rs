// src/feedback/mod.rs
pub mod layer;
pub mod scheduler;

pub use layer::{Anchor, FeedbackLayer, Phase, UiTask, Widget, WidgetId, WidgetKind};
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TimerQueue};
