use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    portion::entities::{Pose, SegmentationMask},
};

/// Foreground segmentation model
#[cfg_attr(test, mockall::automock)]
pub trait Segmenter: Send + Sync {
    fn segment(
        &self,
        image: Bytes,
    ) -> impl Future<Output = Result<SegmentationMask, CoreError>> + Send;
}

/// Skeletal pose model. Keypoints follow the MoveNet ordering.
#[cfg_attr(test, mockall::automock)]
pub trait PoseEstimator: Send + Sync {
    fn estimate_poses(
        &self,
        image: Bytes,
    ) -> impl Future<Output = Result<Vec<Pose>, CoreError>> + Send;
}
