//! Background Tasks Module

mod cleanup;

pub use cleanup::spawn_cleanup_task;
