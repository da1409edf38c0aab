//! Clipped n-gram overlap scoring of answers against the question (the
//! pipeline's final layer).
//!
//! The scorer reads the *last* layer on the document: its first annotation is
//! the Question, every later one an Answer. Overlap is the clipped-count
//! precision familiar from machine-translation evaluation: each shared n-gram
//! contributes `min(question_count, answer_count)`, so repeated terms earn no
//! more credit than the rarer side allows, and the final score is bounded by
//! `overlap / total_question <= 1`.

pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_ORDER, ScoreConfig};
pub use error::{ConfigError, ScoreError};

use tracing::{debug, info};

use crate::document::{
    Annotation, Category, Document, FEATURE_GROUP, FEATURE_SCORE, FrequencyTable, Layer,
    gram_feature,
};

/// Producer name recorded on the score layer.
pub const SCORER_NAME: &str = "cliprank.scorer";

/// Scores each answer's n-gram overlap with the question.
#[derive(Debug, Clone, Default)]
pub struct OverlapScorer {
    config: ScoreConfig,
}

impl OverlapScorer {
    pub fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// The configured n-gram order.
    pub fn order(&self) -> usize {
        self.config.order
    }

    /// Scores every answer of the document's last layer against its question.
    ///
    /// Output annotations reuse each answer's identifier and span; the
    /// `Score` feature is the decimal overlap ratio and `Group` is the
    /// answer's identifier prefix before the first `-`.
    pub fn annotate(&self, document: &Document) -> Result<Layer, ScoreError> {
        let prior = document.last_layer().ok_or(ScoreError::NoPriorLayer)?;
        let order = self.config.order;
        let key = gram_feature(order);

        let mut annotations = prior.annotations().iter();
        let question = annotations.next().ok_or(ScoreError::MissingQuestion)?;
        let question_table =
            question
                .table_feature(&key)
                .ok_or_else(|| ScoreError::MissingTable {
                    annotation: question.id.clone(),
                    order,
                })?;

        let total_question: u64 = question_table.values().sum();
        if total_question == 0 {
            return Err(ScoreError::ZeroQuestionTotal { order });
        }

        let mut layer = Layer::new(SCORER_NAME, Category::Token);
        for answer in annotations {
            let answer_table =
                answer
                    .table_feature(&key)
                    .ok_or_else(|| ScoreError::MissingTable {
                        annotation: answer.id.clone(),
                        order,
                    })?;

            let overlap = clipped_overlap(question_table, answer_table);
            let score = overlap as f64 / total_question as f64;

            let mut annotation =
                Annotation::new(answer.id.clone(), Category::Token, answer.start, answer.end);
            annotation.add_feature(FEATURE_SCORE, score);
            annotation.add_feature(
                FEATURE_GROUP,
                answer.id.split('-').next().unwrap_or(answer.id.as_str()),
            );

            debug!(
                answer = %answer.id,
                overlap,
                total_question,
                score,
                "scored answer"
            );
            layer.push(annotation);
        }

        info!(answers = layer.len(), order, "scored answers against question");

        Ok(layer)
    }
}

/// Sums `min(question_count, answer_count)` over the question's n-gram keys.
fn clipped_overlap(question: &FrequencyTable, answer: &FrequencyTable) -> u64 {
    question
        .iter()
        .filter_map(|(gram, &question_count)| {
            answer
                .get(gram)
                .map(|&answer_count| question_count.min(answer_count))
        })
        .sum()
}
