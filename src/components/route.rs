//! The catalog's route table.

use crate::components::views::{GalleryTest, Home, MemberHeaderTest, ModalTest, NotFound};
use crate::components::CatalogShell;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(CatalogShell)]
        #[route("/")]
        Home {},
        #[route("/modal-test")]
        ModalTest {},
        #[route("/gallery-test")]
        GalleryTest {},
        #[route("/member-header-test")]
        MemberHeaderTest {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Component test pages, in the order the sidebar lists them.
    pub fn catalog() -> [Route; 3] {
        [
            Route::ModalTest {},
            Route::GalleryTest {},
            Route::MemberHeaderTest {},
        ]
    }
}

pub fn route_label(route: &Route) -> &'static str {
    match route {
        Route::Home {} => "Home",
        Route::ModalTest {} => "Modal",
        Route::GalleryTest {} => "Gallery",
        Route::MemberHeaderTest {} => "Member header",
        Route::NotFound { .. } => "Not found",
    }
}

pub fn route_icon(route: &Route) -> &'static str {
    match route {
        Route::Home {} => "home",
        Route::ModalTest {} => "info",
        Route::GalleryTest {} => "image",
        Route::MemberHeaderTest {} => "user",
        Route::NotFound { .. } => "x",
    }
}
