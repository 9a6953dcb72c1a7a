// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ack_prompt;
pub mod main_event_loop;
pub mod main_thread_signal;
pub mod raw_mode;
pub mod terminal_list_view;
pub mod window_title;

// Re-export.
pub use ack_prompt::*;
pub use main_event_loop::*;
pub use main_thread_signal::*;
pub use raw_mode::*;
pub use terminal_list_view::*;
pub use window_title::*;
