//! Seams to host-provided collaborators.

pub mod clipboard;
