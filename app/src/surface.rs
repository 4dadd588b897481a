//! Where figures end up. The browser implementation lives in the `frontend`
//! crate; tests provide in-memory ones.

use crate::error::GalleryError;
use crate::types::ImageDescriptor;

/// Invoked each time a rendered image fails to load, with the location the
/// image actually requested (the browser's resolved `img.src`).
pub type ImageErrorHook = Box<dyn Fn(&str)>;

pub trait GallerySurface {
    type Container;

    /// Looks up the element that receives figures.
    fn find_container(&self, id: &str) -> Option<Self::Container>;

    /// Appends one figure (image plus caption) as the container's last child.
    ///
    /// `src` and `alt` are set on the image only when present, and the
    /// caption text is empty when absent. `on_image_error` must be attached to
    /// the image and may fire at any later time, independently of siblings.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Render`] if the document refuses the mutation.
    fn append_figure(
        &self,
        container: &Self::Container,
        descriptor: &ImageDescriptor,
        on_image_error: ImageErrorHook,
    ) -> Result<(), GalleryError>;
}
