//! User feedback intake: positive ratings become chat-format training examples.
//!
//! Examples are appended one JSON object per line to a dataset file. Each line
//! holds `messages` (the user query and the assistant recommendation) plus
//! `metadata` with `source`, `rating` and an RFC 3339 `timestamp`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::Message;

/// Dataset path used when none is configured.
pub const DEFAULT_DATASET_PATH: &str = "datasets/meal_reasoning_train.jsonl";

/// Lowest rating treated as positive.
pub const DEFAULT_MIN_POSITIVE_RATING: u8 = 4;

const FEEDBACK_SOURCE: &str = "user_feedback";

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialize training example: {0}")]
    Json(#[from] serde_json::Error),
}

/// One piece of user feedback on a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub user_query: String,
    pub recommendation: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleMetadata {
    pub source: String,
    pub rating: u8,
    pub timestamp: String,
}

/// A chat-format training record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub messages: Vec<Message>,
    pub metadata: ExampleMetadata,
}

impl TrainingExample {
    pub fn from_feedback(feedback: &Feedback) -> Self {
        Self {
            messages: vec![
                Message::user(feedback.user_query.clone()),
                Message::assistant(feedback.recommendation.clone()),
            ],
            metadata: ExampleMetadata {
                source: FEEDBACK_SOURCE.to_string(),
                rating: feedback.rating,
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
        }
    }
}

/// What [`FeedbackRecorder::process`] did with a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// A training example was appended.
    UpdatedDataset,
    /// Below the positive threshold; nothing written.
    Logged,
}

impl FeedbackOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            FeedbackOutcome::UpdatedDataset => "updated_dataset",
            FeedbackOutcome::Logged => "logged",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            FeedbackOutcome::UpdatedDataset => "added_positive_example",
            FeedbackOutcome::Logged => "negative_feedback_ignored_for_now",
        }
    }
}

/// Serializable `{status, action}` view of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackReport {
    pub status: &'static str,
    pub action: &'static str,
}

impl From<FeedbackOutcome> for FeedbackReport {
    fn from(outcome: FeedbackOutcome) -> Self {
        Self {
            status: outcome.status(),
            action: outcome.action(),
        }
    }
}

/// Appends positive feedback to a JSONL dataset.
#[derive(Debug, Clone)]
pub struct FeedbackRecorder {
    dataset_path: PathBuf,
    min_positive_rating: u8,
}

impl Default for FeedbackRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl FeedbackRecorder {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            min_positive_rating: DEFAULT_MIN_POSITIVE_RATING,
        }
    }

    pub fn with_min_positive_rating(self, min_positive_rating: u8) -> Self {
        Self {
            min_positive_rating,
            ..self
        }
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    /// Records `feedback` as a training example when its rating is positive.
    pub fn process(&self, feedback: &Feedback) -> Result<FeedbackOutcome, FeedbackError> {
        tracing::info!(
            rating = feedback.rating,
            comment = ?feedback.comment,
            "Processing feedback"
        );
        if feedback.rating < self.min_positive_rating {
            return Ok(FeedbackOutcome::Logged);
        }
        self.append(&TrainingExample::from_feedback(feedback))?;
        Ok(FeedbackOutcome::UpdatedDataset)
    }

    /// Appends one example as a single JSON line, creating parent directories.
    pub fn append(&self, example: &TrainingExample) -> Result<(), FeedbackError> {
        let mut line = serde_json::to_string(example)?;
        line.push('\n');

        let io_err = |source| FeedbackError::Io {
            path: self.dataset_path.clone(),
            source,
        };
        if let Some(parent) = self.dataset_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.dataset_path)
            .map_err(io_err)?;
        file.write_all(line.as_bytes()).map_err(io_err)?;
        tracing::info!(path = %self.dataset_path.display(), "Appended training example");
        Ok(())
    }
}
