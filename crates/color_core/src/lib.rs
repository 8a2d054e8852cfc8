//! Color-state core: the controller that owns the active color, custom draft,
//! recently-used history and transient feedback flags, plus the timer, clock,
//! clipboard and settings seams it is driven through.

pub mod clipboard;
pub mod clock;
pub mod config;
pub mod controller;
pub mod timers;

pub use clipboard::{ClipboardSink, MemoryClipboard, NullClipboard};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{load_settings, Settings};
pub use controller::ColorStateController;
pub use timers::{
    DeadlineTimers, Expired, TimerFacility, TimerHandle, TokioTimers, TransientFlag,
    ANIMATION_PULSE, COPIED_FEEDBACK,
};
