//! Input adapters that turn host events into explorer input messages.

pub mod gui;
