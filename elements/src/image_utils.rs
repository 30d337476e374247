// Copyright (c) 2024 The lumenmap authors
// See LICENSE file in root directory for license terms.

use canonical_error::{CanonicalError, invalid_argument_error};
use image::{GrayImage, ImageBuffer, Luma, Primitive};
use imageproc::map::map_colors2;
use serde::{Deserialize, Serialize};

// Halves the image resolution by averaging each 2x2 block. A trailing odd
// row or column is dropped. Images smaller than 2x2 are returned unchanged.
pub fn downsample_2x(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    if width < 2 || height < 2 {
        return image.clone();
    }
    let (out_width, out_height) = (width / 2, height / 2);
    let raw = image.as_raw();
    let stride = width as usize;
    let mut out_vec = Vec::<u8>::with_capacity((out_width * out_height) as usize);
    for y in 0..out_height as usize {
        let row0 = &raw[2 * y * stride..(2 * y + 1) * stride];
        let row1 = &raw[(2 * y + 1) * stride..(2 * y + 2) * stride];
        for x in 0..out_width as usize {
            let sum = row0[2 * x] as u32 + row0[2 * x + 1] as u32 +
                row1[2 * x] as u32 + row1[2 * x + 1] as u32;
            // Round to nearest.
            out_vec.push(((sum + 2) / 4) as u8);
        }
    }
    GrayImage::from_raw(out_width, out_height, out_vec).unwrap()
}

// Applies downsample_2x() `levels` times.
pub fn reduce_pyramid(image: &GrayImage, levels: u32) -> GrayImage {
    let mut reduced = image.clone();
    for _ in 0..levels {
        reduced = downsample_2x(&reduced);
    }
    reduced
}

// Returns the largest absolute per-pixel difference between the two images.
pub fn peak_abs_difference(image_a: &GrayImage, image_b: &GrayImage)
                           -> Result<u8, CanonicalError> {
    if image_a.dimensions() != image_b.dimensions() {
        return Err(invalid_argument_error(
            format!("Image sizes differ: {:?} vs {:?}",
                    image_a.dimensions(), image_b.dimensions()).as_str()));
    }
    let difference: GrayImage = map_colors2(
        image_a, image_b, |a: Luma<u8>, b: Luma<u8>| Luma([a[0].abs_diff(b[0])]));
    Ok(difference.as_raw().iter().copied().max().unwrap_or(0))
}

// Raw (non-central) image moments up to second order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m20: f64,
    pub m11: f64,
    pub m02: f64,
}

impl Moments {
    // Brightness-weighted center (x, y). None for an all-black image.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 <= 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

pub fn raw_moments<P>(image: &ImageBuffer<Luma<P>, Vec<P>>) -> Moments
where P: Primitive + Into<f64>
{
    let mut moments = Moments::default();
    for (x, y, pixel) in image.enumerate_pixels() {
        let value: f64 = pixel[0].into();
        if value == 0.0 {
            continue;
        }
        let (x, y) = (x as f64, y as f64);
        moments.m00 += value;
        moments.m10 += x * value;
        moments.m01 += y * value;
        moments.m20 += x * x * value;
        moments.m11 += x * y * value;
        moments.m02 += y * y * value;
    }
    moments
}

#[cfg(test)]
mod tests {
    extern crate approx;
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_downsample_2x() {
        let image = GrayImage::from_raw(5, 2, vec![
            0, 4, 10, 10, 99,
            8, 4, 20, 21, 99]).unwrap();
        let reduced = downsample_2x(&image);
        assert_eq!(reduced.dimensions(), (2, 1));
        assert_eq!(reduced.as_raw(), &vec![4, 15]);

        // Too small to reduce further.
        let tiny = reduce_pyramid(&image, 3);
        assert_eq!(tiny.dimensions(), (2, 1));
    }

    #[test]
    fn test_peak_abs_difference() {
        let a = GrayImage::from_raw(3, 1, vec![10, 200, 30]).unwrap();
        let b = GrayImage::from_raw(3, 1, vec![12, 50, 35]).unwrap();
        assert_eq!(peak_abs_difference(&a, &b).unwrap(), 150);
        assert_eq!(peak_abs_difference(&b, &a).unwrap(), 150);
        assert_eq!(peak_abs_difference(&a, &a).unwrap(), 0);

        let c = GrayImage::new(2, 2);
        assert!(peak_abs_difference(&a, &c).is_err());
    }

    #[test]
    fn test_raw_moments() {
        let mut image = ImageBuffer::<Luma<u16>, Vec<u16>>::new(10, 8);
        image.put_pixel(2, 3, Luma([100]));
        image.put_pixel(4, 3, Luma([300]));
        let moments = raw_moments(&image);
        assert_abs_diff_eq!(moments.m00, 400.0);
        assert_abs_diff_eq!(moments.m10, 1400.0);
        assert_abs_diff_eq!(moments.m01, 1200.0);
        let (cx, cy) = moments.centroid().unwrap();
        assert_abs_diff_eq!(cx, 3.5, epsilon = 1e-9);
        assert_abs_diff_eq!(cy, 3.0, epsilon = 1e-9);

        let dark = GrayImage::new(4, 4);
        assert_eq!(raw_moments(&dark).centroid(), None);
    }
}  // mod tests.
