//! Hand-written collaborators shared by the domain tests.

use std::{
    collections::HashMap,
    io::Cursor,
    sync::{Arc, Mutex},
};

use bytes::Bytes;
use image::{ImageFormat, RgbImage};
use serde_json::Value;
use tokio::sync::mpsc;

use crate::domain::{
    chat::ports::LLMClient,
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{HistoryEntry, SaveAnalysisRequest},
        ports::HistoryRepository,
    },
    food_recognition::ports::FoodClassifier,
    nutrition::ports::NutritionClient,
    portion::{
        entities::{Keypoint, Pose, SegmentationMask},
        ports::{PoseEstimator, Segmenter},
    },
};

pub fn unavailable() -> CoreError {
    CoreError::ExternalServiceError("unavailable".to_string())
}

/// Encode a black PNG of the given size.
pub fn png_image(width: u32, height: u32) -> Bytes {
    let mut buffer = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode png");
    Bytes::from(buffer.into_inner())
}

/// A 17-keypoint pose with only the left elbow and wrist set.
pub fn forearm_pose(distance_px: f64, elbow_score: f64, wrist_score: f64) -> Pose {
    let mut keypoints = vec![
        Keypoint {
            x: 0.0,
            y: 0.0,
            score: 0.0
        };
        17
    ];
    keypoints[7] = Keypoint {
        x: 10.0,
        y: 20.0,
        score: elbow_score,
    };
    keypoints[9] = Keypoint {
        x: 10.0 + distance_px,
        y: 20.0,
        score: wrist_score,
    };
    Pose { keypoints }
}

/// Mask with the first `foreground` pixels opaque.
pub fn mask(width: u32, height: u32, foreground: usize) -> SegmentationMask {
    let mut alpha = vec![0u8; (width * height) as usize];
    alpha[..foreground].fill(255);
    SegmentationMask {
        width,
        height,
        alpha,
    }
}

pub struct FixedClassifier(pub Result<Value, CoreError>);

impl FoodClassifier for FixedClassifier {
    async fn classify(&self, _image: Bytes) -> Result<Value, CoreError> {
        self.0.clone()
    }
}

/// Fails the test if the pipeline reaches classification.
pub struct PanickingClassifier;

impl FoodClassifier for PanickingClassifier {
    async fn classify(&self, _image: Bytes) -> Result<Value, CoreError> {
        panic!("classifier must not be called");
    }
}

#[derive(Clone)]
pub struct FixedSegmenter(pub Result<SegmentationMask, CoreError>);

impl Segmenter for FixedSegmenter {
    async fn segment(&self, _image: Bytes) -> Result<SegmentationMask, CoreError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct FixedPoses(pub Result<Vec<Pose>, CoreError>);

impl PoseEstimator for FixedPoses {
    async fn estimate_poses(&self, _image: Bytes) -> Result<Vec<Pose>, CoreError> {
        self.0.clone()
    }
}

/// Knows a fixed set of foods; every other lookup fails.
pub struct FixedNutrition(HashMap<String, f64>);

impl FixedNutrition {
    pub fn with<const N: usize>(entries: [(&str, f64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(name, calories)| (name.to_string(), calories))
                .collect(),
        )
    }

    pub fn failing() -> Self {
        Self(HashMap::new())
    }
}

impl NutritionClient for FixedNutrition {
    async fn calories_per_100g(&self, food_name: String) -> Result<f64, CoreError> {
        self.0
            .get(&food_name)
            .copied()
            .ok_or_else(|| CoreError::ExternalServiceError(format!("no data for {food_name}")))
    }
}

/// Stores entries in memory and forwards every save to a channel.
#[derive(Clone)]
pub struct RecordingHistory {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
    saved: mpsc::UnboundedSender<SaveAnalysisRequest>,
}

impl RecordingHistory {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SaveAnalysisRequest>) {
        let (saved, receiver) = mpsc::unbounded_channel();
        (
            Self {
                entries: Arc::new(Mutex::new(Vec::new())),
                saved,
            },
            receiver,
        )
    }
}

impl HistoryRepository for RecordingHistory {
    async fn save(&self, request: SaveAnalysisRequest) -> Result<(), CoreError> {
        self.entries.lock().unwrap().push(request.clone().into());
        let _ = self.saved.send(request);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        Ok(self.entries.lock().unwrap().clone())
    }
}

pub struct FailingHistory;

impl HistoryRepository for FailingHistory {
    async fn save(&self, _request: SaveAnalysisRequest) -> Result<(), CoreError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        Err(unavailable())
    }
}

#[derive(Debug, Clone)]
pub struct LLMCall {
    pub prompt: String,
    pub with_image: bool,
}

#[derive(Clone)]
pub struct ScriptedLLM {
    reply: Result<String, CoreError>,
    calls: Arc<Mutex<Vec<LLMCall>>>,
}

impl ScriptedLLM {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err(unavailable()),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<LLMCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, prompt: String, with_image: bool) -> Result<String, CoreError> {
        self.calls
            .lock()
            .unwrap()
            .push(LLMCall { prompt, with_image });
        self.reply.clone()
    }
}

impl LLMClient for ScriptedLLM {
    async fn generate_with_image(
        &self,
        prompt: String,
        _image_data: Bytes,
    ) -> Result<String, CoreError> {
        self.record(prompt, true)
    }

    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.record(prompt, false)
    }
}
