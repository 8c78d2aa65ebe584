//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its layout and delegates repeated pieces of markup to
//! `components`.

pub mod landing;
