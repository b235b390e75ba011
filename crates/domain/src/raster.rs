use crate::DomainError;

pub type Pixel = [u8; 4];

pub const TRANSPARENT: Pixel = [0, 0, 0, 0];

/// Owned RGBA raster. Every transform produces a new `Raster`; nothing
/// mutates pixel data in place behind a shared handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    orientation: Option<u8>,
    pixels: Vec<Pixel>,
}

impl Raster {
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, DomainError> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(DomainError::RasterSizeMismatch {
                width,
                height,
                pixel_count: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            orientation: None,
            pixels,
        })
    }

    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            orientation: None,
            pixels: vec![pixel; (width as usize) * (height as usize)],
        }
    }

    pub fn with_orientation(mut self, orientation: u8) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn orientation(&self) -> Option<u8> {
        self.orientation
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Same dimensions and orientation, new pixel data.
    pub(crate) fn same_shape(&self, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            width: self.width,
            height: self.height,
            orientation: self.orientation,
            pixels,
        }
    }

    pub(crate) fn from_raw(
        width: u32,
        height: u32,
        orientation: Option<u8>,
        pixels: Vec<Pixel>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            orientation,
            pixels,
        }
    }
}
