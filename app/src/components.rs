//! Reusable views shared by the gallery pages.

pub mod error_template;
