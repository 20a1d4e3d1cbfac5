pub mod pose_client;
pub mod segmentation_client;

pub use pose_client::HttpPoseEstimator;
pub use segmentation_client::HttpSegmenter;
