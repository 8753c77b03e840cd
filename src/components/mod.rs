//! The components module contains all shared components for the catalog.

mod gallery;
mod icons;
mod member_header;
mod modal;
mod route;
mod shell;
mod views;

pub use gallery::*;
pub use icons::*;
pub use member_header::*;
pub use modal::*;
pub use route::*;
pub use shell::*;
// Views are accessed via views::ViewName
