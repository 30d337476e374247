// Copyright (c) 2024 The lumenmap authors
// See LICENSE file in root directory for license terms.

use async_trait::async_trait;
use canonical_error::CanonicalError;

// A still camera that delivers whole RAW files. The camera's exposure
// settings are configured out of band; we only trigger it.
#[async_trait]
pub trait CameraTrait: Send {
    // Describes the camera, for logging.
    fn model(&self) -> String;

    // Triggers one exposure and returns the camera's RAW file contents.
    // Errors:
    //   Unavailable: the camera could not be reached, refused the capture or
    //     returned no data.
    async fn capture(&mut self) -> Result<Vec<u8>, CanonicalError>;
}
