//! Scoring engine.
//!
//! Maps an [`AnswerSet`] onto a point in the 0..=100 × 0..=100 plane and a
//! [`Quadrant`]. The computation is a pure function of its inputs, so it can
//! run on every answer change for a live preview.

mod quadrant;

pub use quadrant::{QUADRANT_THRESHOLD, Quadrant, QuadrantDetails};

use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::question::{Axis, Question};

/// Result of scoring one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Economic axis, 0 (private) to 100 (state).
    pub x: f64,
    /// Social axis, 0 (freedom) to 100 (state control).
    pub y: f64,
    pub quadrant: Quadrant,
}

impl Score {
    pub fn from_point(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            quadrant: Quadrant::classify(x, y),
        }
    }
}

/// Scores `answers` against the given questions.
///
/// Questions are partitioned by axis; each axis is the mean of the
/// normalized answers present for that axis. Unanswered questions are
/// skipped and an axis with no answers scores `0.0`.
pub fn score<'a, I>(answers: &AnswerSet, questions: I) -> Score
where
    I: IntoIterator<Item = &'a Question>,
{
    let mut social = Mean::default();
    let mut economic = Mean::default();

    for question in questions {
        let Some(value) = answers.get(question.key) else {
            continue;
        };
        match question.axis {
            Axis::Social => social.push(value.normalized()),
            Axis::Economic => economic.push(value.normalized()),
        }
    }

    Score::from_point(economic.value(), social.value())
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::AnswerValue;
    use crate::question::QuestionSet;

    fn answers(pairs: &[(&str, i64)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(k, v)| (*k, AnswerValue::new(*v).unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let set = QuestionSet::full();
        let score = score(&AnswerSet::new(), set.iter());
        assert_eq!(score.x, 0.0);
        assert_eq!(score.y, 0.0);
        assert_eq!(score.quadrant, Quadrant::BottomLeft);
    }

    #[test]
    fn test_tie_scenario_lands_top_right() {
        let questions = vec![
            Question::new("s1", Axis::Social, "", ""),
            Question::new("s2", Axis::Social, "", ""),
            Question::new("e1", Axis::Economic, "", ""),
            Question::new("e2", Axis::Economic, "", ""),
        ];
        let answers = answers(&[("s1", 1), ("s2", 5), ("e1", 3), ("e2", 3)]);

        let score = score(&answers, &questions);

        assert_eq!(score.y, 50.0);
        assert_eq!(score.x, 50.0);
        assert_eq!(score.quadrant, Quadrant::TopRight);
    }

    #[test]
    fn test_axes_are_independent() {
        let set = QuestionSet::full();
        let answers = answers(&[("s1", 5), ("s2", 5), ("e1", 1)]);
        let score = score(&answers, set.iter());
        assert_eq!(score.y, 100.0);
        assert_eq!(score.x, 0.0);
        assert_eq!(score.quadrant, Quadrant::TopLeft);
    }

    #[test]
    fn test_answers_outside_question_set_are_ignored() {
        let set = QuestionSet::limited(2); // s1, s2
        let answers = answers(&[("s1", 2), ("e7", 5)]);
        let score = score(&answers, set.iter());
        assert_eq!(score.y, 25.0);
        assert_eq!(score.x, 0.0);
    }

    #[test]
    fn test_scores_stay_in_range_for_every_uniform_answer() {
        let set = QuestionSet::full();
        for value in 1..=5 {
            let answers: AnswerSet = set
                .iter()
                .map(|q| (q.key, AnswerValue::new(value).unwrap()))
                .collect();
            let score = score(&answers, set.iter());
            assert!((0.0..=100.0).contains(&score.x));
            assert!((0.0..=100.0).contains(&score.y));
            assert_eq!(score.x, score.y);
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let set = QuestionSet::full();
        let answers = answers(&[("s3", 4), ("e9", 2), ("e10", 5)]);
        assert_eq!(score(&answers, set.iter()), score(&answers, set.iter()));
    }
}
