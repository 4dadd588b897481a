//! The gallery page. It renders an empty container; figures are appended to
//! it in the browser by [`crate::loader::GalleryLoader`].

use leptos::{
    html::{div, h1, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::types::GALLERY_ID;

pub fn component() -> impl IntoView {
    section().class("gallery-section").child((
        Title(TitleProps::builder().text("Gallery").build()),
        h1().class("gallery-title").child("Gallery"),
        div().id(GALLERY_ID).class("gallery"),
    ))
}
