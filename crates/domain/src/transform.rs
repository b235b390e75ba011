use crate::raster::TRANSPARENT;
use crate::{DomainError, FilterKind, Raster, RotationAngle};

/// Shift the white point toward the preset's Kelvin target. `Original` is
/// the identity. An empty raster cannot be filtered and reports
/// `DomainError::EmptyRaster`; the caller decides whether to fall back to
/// the unfiltered image.
pub fn apply_filter(image: &Raster, filter: FilterKind) -> Result<Raster, DomainError> {
    let Some(kelvin) = filter.kelvin_target() else {
        return Ok(image.clone());
    };
    if image.is_empty() {
        return Err(DomainError::EmptyRaster);
    }

    let [r_mul, g_mul, b_mul] = kelvin_to_rgb_multipliers(kelvin);
    let pixels = image
        .pixels()
        .iter()
        .map(|&[r, g, b, a]| {
            [
                scale_channel(r, r_mul),
                scale_channel(g, g_mul),
                scale_channel(b, b_mul),
                a,
            ]
        })
        .collect();
    Ok(image.same_shape(pixels))
}

/// Rotate clockwise about the center. The output canvas is the tight
/// bounding box of the rotated content, so quarter turns swap width and
/// height. Total over all angles; an empty raster passes through unchanged.
pub fn apply_rotation(image: &Raster, angle: RotationAngle) -> Raster {
    if image.is_empty() {
        return image.clone();
    }
    match angle.quarter_turns() {
        Some(0) => image.clone(),
        Some(turns) => rotate_quarter_turns(image, turns),
        None => rotate_arbitrary(image, angle.degrees()),
    }
}

/// Filter first, then rotation. The order is fixed: rotating first would
/// change the canvas the temperature pass samples.
pub fn apply_filter_and_rotation(
    image: &Raster,
    filter: FilterKind,
    angle: RotationAngle,
) -> Result<Raster, DomainError> {
    let filtered = apply_filter(image, filter)?;
    Ok(apply_rotation(&filtered, angle))
}

pub fn rotate_left(image: &Raster, current: RotationAngle) -> (Raster, RotationAngle) {
    let next = current.rotated_left();
    (apply_rotation(image, next), next)
}

pub fn rotate_right(image: &Raster, current: RotationAngle) -> (Raster, RotationAngle) {
    let next = current.rotated_right();
    (apply_rotation(image, next), next)
}

fn scale_channel(channel: u8, factor: f32) -> u8 {
    (f32::from(channel) * factor).round().clamp(0.0, 255.0) as u8
}

/// Kelvin temperature to RGB correction multipliers, normalized to the
/// green channel. Polynomial fit of the Planckian locus after Tanner
/// Helland (https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html).
fn kelvin_to_rgb_multipliers(kelvin: f32) -> [f32; 3] {
    let temp = (kelvin / 100.0).clamp(10.0, 400.0);

    let (r, g, b) = if temp <= 66.0 {
        let g = 99.470_802_586_1 * temp.ln() - 161.119_568_166_1;
        let b = if temp <= 19.0 {
            0.0
        } else {
            138.517_731_223_1 * (temp - 10.0).ln() - 305.044_792_730_7
        };
        (255.0, g.clamp(0.0, 255.0), b.clamp(0.0, 255.0))
    } else {
        let r = 329.698_727_446 * (temp - 60.0).powf(-0.133_204_759_2);
        let g = 288.122_169_528_3 * (temp - 60.0).powf(-0.075_514_849_2);
        (r.clamp(0.0, 255.0), g.clamp(0.0, 255.0), 255.0)
    };

    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let g_ref = g.max(0.001);
    [g_ref / r.max(0.001), 1.0, g_ref / b.max(0.001)]
}

/// Exact index remapping for multiples of 90 degrees; no resampling loss.
fn rotate_quarter_turns(image: &Raster, turns: u32) -> Raster {
    let width = image.width();
    let height = image.height();
    let (out_w, out_h) = if turns % 2 == 1 {
        (height, width)
    } else {
        (width, height)
    };

    let mut pixels = Vec::with_capacity(image.pixels().len());
    for y in 0..out_h {
        for x in 0..out_w {
            let (src_x, src_y) = match turns {
                1 => (y, height - 1 - x),
                2 => (width - 1 - x, height - 1 - y),
                _ => (width - 1 - y, x),
            };
            pixels.push(image.pixel(src_x, src_y));
        }
    }
    Raster::from_raw(out_w, out_h, image.orientation(), pixels)
}

/// Inverse-mapped nearest-neighbor rotation with transparent fill outside
/// the source bounds.
fn rotate_arbitrary(image: &Raster, degrees: f32) -> Raster {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let src_w = image.width() as f32;
    let src_h = image.height() as f32;
    let out_w = (cos.abs() * src_w + sin.abs() * src_h).round().max(1.0) as u32;
    let out_h = (sin.abs() * src_w + cos.abs() * src_h).round().max(1.0) as u32;

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let out_cx = out_w as f32 / 2.0;
    let out_cy = out_h as f32 / 2.0;

    let mut pixels = Vec::with_capacity((out_w as usize) * (out_h as usize));
    for y in 0..out_h {
        for x in 0..out_w {
            let dx = x as f32 + 0.5 - out_cx;
            let dy = y as f32 + 0.5 - out_cy;
            let src_x = cos * dx + sin * dy + src_cx;
            let src_y = -sin * dx + cos * dy + src_cy;
            let pixel = if src_x >= 0.0 && src_y >= 0.0 && src_x < src_w && src_y < src_h {
                image.pixel(src_x as u32, src_y as u32)
            } else {
                TRANSPARENT
            };
            pixels.push(pixel);
        }
    }
    Raster::from_raw(out_w, out_h, image.orientation(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pixel;

    fn marker(id: u8) -> Pixel {
        [id, 0, 0, 255]
    }

    fn markers(raster: &Raster) -> Vec<u8> {
        raster.pixels().iter().map(|pixel| pixel[0]).collect()
    }

    fn three_by_two() -> Raster {
        Raster::new(
            3,
            2,
            vec![
                marker(1),
                marker(2),
                marker(3),
                marker(4),
                marker(5),
                marker(6),
            ],
        )
        .expect("valid raster")
    }

    #[test]
    fn original_filter_is_identity() {
        let image = three_by_two();
        let filtered = apply_filter(&image, FilterKind::Original).expect("filter");
        assert_eq!(filtered, image);
    }

    #[test]
    fn warm_filter_shifts_toward_red() {
        let gray = Raster::filled(2, 2, [128, 128, 128, 255]);
        let warmed = apply_filter(&gray, FilterKind::Warm).expect("filter");
        let [r, _, b, a] = warmed.pixel(0, 0);
        assert!(r > b, "warm output should favor red, got r={r} b={b}");
        assert_eq!(a, 255);
    }

    #[test]
    fn cold_filter_shifts_toward_blue() {
        let gray = Raster::filled(2, 2, [128, 128, 128, 255]);
        let cooled = apply_filter(&gray, FilterKind::Cold).expect("filter");
        let [r, _, b, _] = cooled.pixel(0, 0);
        assert!(b > r, "cold output should favor blue, got r={r} b={b}");
    }

    #[test]
    fn filter_preserves_shape_and_orientation() {
        let image = Raster::filled(4, 3, [10, 20, 30, 255]).with_orientation(6);
        let filtered = apply_filter(&image, FilterKind::Cold).expect("filter");
        assert_eq!(filtered.width(), 4);
        assert_eq!(filtered.height(), 3);
        assert_eq!(filtered.orientation(), Some(6));
    }

    #[test]
    fn filtering_an_empty_raster_fails() {
        let empty = Raster::new(0, 0, Vec::new()).expect("empty raster");
        assert_eq!(
            apply_filter(&empty, FilterKind::Warm),
            Err(DomainError::EmptyRaster)
        );
        // Identity never inspects the pixels.
        assert!(apply_filter(&empty, FilterKind::Original).is_ok());
    }

    #[test]
    fn zero_rotation_is_identity() {
        let image = three_by_two();
        assert_eq!(apply_rotation(&image, RotationAngle::ZERO), image);
    }

    #[test]
    fn quarter_turn_clockwise_remaps_exactly() {
        let rotated = apply_rotation(&three_by_two(), RotationAngle::new(90.0));
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(markers(&rotated), vec![4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn quarter_turn_counterclockwise_remaps_exactly() {
        let rotated = apply_rotation(&three_by_two(), RotationAngle::new(270.0));
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(markers(&rotated), vec![3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn half_turn_reverses_pixels() {
        let rotated = apply_rotation(&three_by_two(), RotationAngle::new(180.0));
        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 2);
        assert_eq!(markers(&rotated), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn ninety_degrees_swaps_bounding_box() {
        let image = Raster::filled(200, 100, marker(7));
        let rotated = apply_rotation(&image, RotationAngle::new(90.0));
        assert_eq!((rotated.width(), rotated.height()), (100, 200));
    }

    #[test]
    fn quarter_turn_round_trip_restores_bounding_box() {
        let image = Raster::filled(200, 100, marker(7));
        for degrees in [90.0, 180.0, 270.0] {
            let there = apply_rotation(&image, RotationAngle::new(degrees));
            let back = apply_rotation(&there, RotationAngle::new(-degrees));
            assert_eq!((back.width(), back.height()), (200, 100));
            assert_eq!(back, image);
        }
    }

    #[test]
    fn arbitrary_angle_uses_tight_bounding_box() {
        let image = Raster::filled(200, 100, marker(7));
        let rotated = apply_rotation(&image, RotationAngle::new(30.0));
        // |cos 30|*200 + |sin 30|*100 = 223.2, |sin 30|*200 + |cos 30|*100 = 186.6
        assert_eq!((rotated.width(), rotated.height()), (223, 187));
    }

    #[test]
    fn arbitrary_rotation_fills_corners_with_transparency() {
        let image = Raster::filled(10, 10, [255, 255, 255, 255]);
        let rotated = apply_rotation(&image, RotationAngle::new(45.0));
        assert_eq!(rotated.pixel(0, 0), TRANSPARENT);
    }

    #[test]
    fn compose_filters_then_rotates() {
        let image = Raster::filled(200, 100, [128, 128, 128, 255]);
        let composed =
            apply_filter_and_rotation(&image, FilterKind::Warm, RotationAngle::new(90.0))
                .expect("compose");
        assert_eq!((composed.width(), composed.height()), (100, 200));
        let [r, _, b, _] = composed.pixel(50, 50);
        assert!(r > b);
    }

    #[test]
    fn rotate_right_steps_the_angle() {
        let image = three_by_two();
        let (rotated, angle) = rotate_right(&image, RotationAngle::ZERO);
        assert_eq!(angle.degrees(), 90.0);
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
    }

    #[test]
    fn rotate_left_from_zero_lands_on_270() {
        let image = three_by_two();
        let (rotated, angle) = rotate_left(&image, RotationAngle::ZERO);
        assert_eq!(angle.degrees(), 270.0);
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
    }

    #[test]
    fn rotation_passes_empty_raster_through() {
        let empty = Raster::new(0, 0, Vec::new()).expect("empty raster");
        assert_eq!(apply_rotation(&empty, RotationAngle::new(90.0)), empty);
    }
}
