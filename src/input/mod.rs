//! Input adapters for the avatar host.
//!
//! `control` receives payloads from the remote controller; `commands` turns them into
//! simulator calls once per frame.

pub mod commands;
pub mod control;
