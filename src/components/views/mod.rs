//! One test page per catalog component.

mod home;
mod member_header_test;
mod not_found;

pub use gallery_test::*;
pub use home::*;
pub use member_header_test::*;
pub use modal_test::*;
pub use not_found::*;
