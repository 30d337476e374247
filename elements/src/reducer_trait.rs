// Copyright (c) 2024 The lumenmap authors
// See LICENSE file in root directory for license terms.

use std::path::Path;

use canonical_error::CanonicalError;

use crate::image_utils::Moments;

#[derive(Clone, Debug, PartialEq)]
pub struct MomentsResult {
    pub moments: Moments,

    // (width, height) of the image the moments were computed over.
    pub size: (u32, u32),
}

// Image reductions over files in the data directory. All methods are CPU
// bound and synchronous; they are called from worker pool threads and must
// not touch any shared state.
pub trait ReducerTrait: Send + Sync {
    // Decodes `raw`, converts to grayscale and halves the resolution `scale`
    // times. Returns an encoded image.
    fn make_thumbnail(&self, raw: &Path, scale: u32)
                      -> Result<Vec<u8>, CanonicalError>;

    // Maximum absolute per-pixel difference between two grayscale images of
    // equal size.
    fn peak_difference(&self, image_a: &Path, image_b: &Path)
                       -> Result<f64, CanonicalError>;

    // Full resolution, linear (undemosaiced) rendition of a dark frame, in a
    // form accepted as `background` by subtract_background().
    fn extract_linear_background(&self, raw: &Path)
                                 -> Result<Vec<u8>, CanonicalError>;

    // Linear rendition of `raw` with `background` subtracted.
    // `denoise` Wavelet denoising threshold; 0 disables.
    // `black_level` Darkness level to subtract in addition to `background`.
    fn subtract_background(&self, raw: &Path, background: &Path,
                           denoise: u32, black_level: u32)
                           -> Result<Vec<u8>, CanonicalError>;

    fn compute_moments(&self, image: &Path) -> Result<MomentsResult, CanonicalError>;
}
