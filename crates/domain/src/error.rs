use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    RasterSizeMismatch {
        width: u32,
        height: u32,
        pixel_count: usize,
    },
    EmptyRaster,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RasterSizeMismatch {
                width,
                height,
                pixel_count,
            } => write!(
                f,
                "raster of {width}x{height} requires {} pixels, got {pixel_count}",
                (*width as usize) * (*height as usize)
            ),
            Self::EmptyRaster => write!(f, "raster has no pixels"),
        }
    }
}

impl std::error::Error for DomainError {}
