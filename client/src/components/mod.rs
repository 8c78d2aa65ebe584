//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless. They receive fixed content from the pages that
//! mount them and read nothing from context.

pub mod cta_link;
pub mod shield_badge;
