mod collection;
mod edit;
mod error;
mod raster;
mod transform;

pub use collection::{page_slice, CollectionName, ContentRef};
pub use edit::{FilterKind, RotationAngle};
pub use error::DomainError;
pub use raster::{Pixel, Raster, TRANSPARENT};
pub use transform::{
    apply_filter, apply_filter_and_rotation, apply_rotation, rotate_left, rotate_right,
};
