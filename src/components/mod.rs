//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and listing entries while the owning
//! pages keep all network orchestration.

pub mod file_card;
pub mod sidebar;
