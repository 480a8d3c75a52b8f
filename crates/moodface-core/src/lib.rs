//! Platform-independent core library for the moodface widget.
//!
//! This crate contains everything the emotional face widget needs that does
//! not depend on a concrete display or windowing host: the widget lifecycle
//! trait, styling, proportional face geometry, state save/restore, and a
//! dirty-tracking framebuffer.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod framebuffer;
pub mod state;
pub mod ui;
pub mod widgets;
