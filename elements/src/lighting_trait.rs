// Copyright (c) 2024 The lumenmap authors
// See LICENSE file in root directory for license terms.

use async_trait::async_trait;
use canonical_error::CanonicalError;

// Number of lights a controller channel (strip) can address.
pub const LIGHTS_PER_STRIP: u32 = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    // Stable identifier of the controller, e.g. its USB serial number.
    pub serial: String,

    // Number of strip outputs the controller drives.
    pub strip_count: u32,
}

// Controls the lights of an installation. Each call completes once the
// lighting subsystem has accepted the new state; callers are responsible for
// bounding how long they wait.
#[async_trait]
pub trait LightingTrait: Send {
    async fn enumerate_devices(&mut self) -> Result<Vec<DeviceInfo>, CanonicalError>;

    // Turns every light of `serial` off.
    async fn set_all_off(&mut self, serial: &str) -> Result<(), CanonicalError>;

    // Turns light `index` of `serial` on at full intensity and all of that
    // device's other lights off.
    async fn set_single(&mut self, serial: &str, index: u32)
                        -> Result<(), CanonicalError>;

    // Releases the connection. Further calls fail.
    async fn close(&mut self) -> Result<(), CanonicalError>;
}
