//! Recursive subdivision of the problem space.

mod cantor_set;
mod image_compression;

pub use cantor_set::CantorSet;
pub use image_compression::{Image, ImageCompression};

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![Box::new(CantorSet), Box::new(ImageCompression)]
}
