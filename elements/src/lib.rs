// Copyright (c) 2024 The lumenmap authors
// See LICENSE file in root directory for license terms.

pub mod camera_trait;
pub mod image_utils;
pub mod lighting_trait;
pub mod reducer_trait;
