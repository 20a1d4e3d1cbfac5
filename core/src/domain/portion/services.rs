use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, fallback::attempt_optional},
    portion::{
        entities::{ImageFrame, Pose, PortionEstimate, SegmentationMask},
        ports::{PoseEstimator, Segmenter},
    },
};

/// Alpha values at or below this are background.
pub const ALPHA_THRESHOLD: u8 = 10;
pub const DEFAULT_SCALE_CM_PER_PX: f64 = 0.5;
pub const MIN_KEYPOINT_SCORE: f64 = 0.5;
/// Elbow-to-wrist length assumed for the reference forearm.
pub const FOREARM_LENGTH_CM: f64 = 30.0;
pub const ASSUMED_DEPTH_CM: f64 = 3.0;
pub const DEFAULT_DENSITY_G_PER_CM3: f64 = 0.8;

const LEFT_ELBOW: usize = 7;
const LEFT_WRIST: usize = 9;

/// Count foreground pixels in `mask` and rescale the count to the source
/// image resolution.
pub fn foreground_pixel_area(
    mask: &SegmentationMask,
    source_width: u32,
) -> Result<f64, CoreError> {
    let expected = mask.width as usize * mask.height as usize;
    if expected == 0 || mask.alpha.len() != expected {
        return Err(CoreError::ExternalServiceError(format!(
            "segmentation mask has {} alpha values for {}x{} pixels",
            mask.alpha.len(),
            mask.width,
            mask.height
        )));
    }

    let count = mask
        .alpha
        .iter()
        .filter(|&&alpha| alpha > ALPHA_THRESHOLD)
        .count();

    if count == 0 {
        return Err(CoreError::ExternalServiceError(
            "segmentation found no foreground".to_string(),
        ));
    }

    let scale = f64::from(source_width) / f64::from(mask.width);
    Ok(count as f64 * scale * scale)
}

/// Derive cm-per-pixel from the first pose's left forearm, if it is visible.
pub fn scale_from_poses(poses: &[Pose]) -> Option<f64> {
    let pose = poses.first()?;
    let elbow = pose.keypoints.get(LEFT_ELBOW)?;
    let wrist = pose.keypoints.get(LEFT_WRIST)?;

    if elbow.score < MIN_KEYPOINT_SCORE || wrist.score < MIN_KEYPOINT_SCORE {
        return None;
    }

    let distance_px = (wrist.x - elbow.x).hypot(wrist.y - elbow.y);
    let scale = FOREARM_LENGTH_CM / distance_px;

    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Estimates the mass of food in an image from segmentation and an
/// anatomical size reference. Both models are optional.
#[derive(Debug, Clone)]
pub struct PortionEstimator<SG, PE> {
    segmenter: Option<SG>,
    pose_estimator: Option<PE>,
}

impl<SG, PE> PortionEstimator<SG, PE>
where
    SG: Segmenter,
    PE: PoseEstimator,
{
    pub fn new(segmenter: Option<SG>, pose_estimator: Option<PE>) -> Self {
        Self {
            segmenter,
            pose_estimator,
        }
    }

    pub async fn pixel_area(&self, image: &ImageFrame) -> Option<f64> {
        let segmentation = self.segmenter.as_ref().map(|segmenter| async move {
            let mask = segmenter.segment(image.data.clone()).await?;
            foreground_pixel_area(&mask, image.width).map(Some)
        });

        attempt_optional("segmentation", segmentation, None).await
    }

    pub async fn scale_factor(&self, image: &ImageFrame) -> Option<f64> {
        let pose = self.pose_estimator.as_ref().map(|estimator| async move {
            let poses = estimator.estimate_poses(image.data.clone()).await?;
            let scale = scale_from_poses(&poses);
            if scale.is_none() {
                debug!(poses = poses.len(), "no usable forearm keypoints");
            }
            Ok(scale)
        });

        attempt_optional("pose_estimation", pose, None).await
    }

    /// Never fails: every step degrades to its default.
    pub async fn estimate(&self, image: &ImageFrame) -> PortionEstimate {
        let (segmented_area, pose_scale) =
            futures::join!(self.pixel_area(image), self.scale_factor(image));

        let pixel_area = segmented_area.unwrap_or_else(|| image.pixel_area());
        let scale_cm_per_px = pose_scale.unwrap_or(DEFAULT_SCALE_CM_PER_PX);

        let area_cm2 = pixel_area * scale_cm_per_px.powi(2);
        let volume_cm3 = area_cm2 * ASSUMED_DEPTH_CM;
        let mass_grams = volume_cm3 * DEFAULT_DENSITY_G_PER_CM3;

        PortionEstimate {
            pixel_area,
            scale_cm_per_px,
            area_cm2,
            volume_cm3,
            mass_grams,
            segmentation_fallback: segmented_area.is_none(),
            scale_fallback: pose_scale.is_none(),
        }
    }
}
