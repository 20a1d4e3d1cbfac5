use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use image::ImageReader;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// An uploaded image together with its decoded dimensions.
#[derive(Debug, Clone)]
pub struct ImageFrame {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

impl ImageFrame {
    /// Reads only the image header; pixel data is left to the collaborators.
    pub fn decode(data: Bytes) -> Result<Self, CoreError> {
        if data.is_empty() {
            return Err(CoreError::MissingImage);
        }

        let (width, height) = ImageReader::new(Cursor::new(data.as_ref()))
            .with_guessed_format()
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?
            .into_dimensions()
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?;

        if width == 0 || height == 0 {
            return Err(CoreError::InvalidImage("image has no pixels".to_string()));
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn pixel_area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    pub fn data_url(&self) -> String {
        image_data_url(&self.data)
    }
}

/// `data:<mime>;base64,<payload>` for raw image bytes
pub fn image_data_url(data: &[u8]) -> String {
    let mime = image::guess_format(data)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");

    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(data))
}

/// Alpha mask produced by the segmentation model, possibly at a different
/// resolution than the source image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationMask {
    pub width: u32,
    pub height: u32,
    /// One alpha byte per pixel, row-major
    pub alpha: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub keypoints: Vec<Keypoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortionEstimate {
    pub pixel_area: f64,
    pub scale_cm_per_px: f64,
    pub area_cm2: f64,
    pub volume_cm3: f64,
    pub mass_grams: f64,
    /// True when the pixel area is the full image instead of a segmented one
    pub segmentation_fallback: bool,
    /// True when the default scale was used instead of a pose-derived one
    pub scale_fallback: bool,
}
