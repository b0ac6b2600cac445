#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::locale::Locale;
    use crate::scoring::Quadrant;
    use crate::survey::profile::{NicknamePolicy, ProfileLimits};
    use crate::survey::session::{SurveyFlow, SurveySession};
    use crate::survey::stage::Stage;
    use crate::survey::transition::{Transition, ValidationError};

    fn flow(questions_limit: usize) -> Arc<SurveyFlow> {
        Arc::new(SurveyFlow::new(
            questions_limit,
            ProfileLimits::default(),
            NicknamePolicy::Truncate,
        ))
    }

    fn started(questions_limit: usize, locale: Locale) -> SurveySession {
        let mut session = SurveySession::new(flow(questions_limit), locale);
        assert_eq!(
            session.start(locale),
            Transition::Advanced {
                stage: Stage::Questions
            }
        );
        session
    }

    #[test]
    fn test_not_started_accepts_only_start() {
        let mut session = SurveySession::new(flow(3), Locale::Ua);

        assert!(session.answer("s1", 3).is_ignored());
        assert!(session.answer_current(3).is_ignored());
        assert!(session.set_nickname("neo").is_ignored());
        assert!(session.set_emoji("🦊").is_ignored());
        assert!(session.set_slogan("hi").is_ignored());
        assert_eq!(session.stage(), Stage::NotStarted);

        session.start(Locale::En);
        assert_eq!(session.stage(), Stage::Questions);
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(session.current_question().map(|q| q.key), Some("s1"));
    }

    #[test]
    fn test_start_is_ignored_once_running() {
        let mut session = started(3, Locale::En);
        session.answer_current(2);
        assert!(session.start(Locale::Ua).is_ignored());
        assert_eq!(session.step(), 1);
        assert_eq!(session.locale(), Locale::En);
    }

    #[test]
    fn test_stale_answer_is_ignored() {
        let mut session = started(3, Locale::En);
        assert!(!session.answer("s1", 4).is_ignored());

        // The same button pressed twice.
        assert!(session.answer("s1", 1).is_ignored());
        assert_eq!(session.step(), 1);
        assert_eq!(session.answers().get("s1").map(|v| v.get()), Some(4));

        // An answer for a question that is not reached yet.
        assert!(session.answer("s3", 1).is_ignored());
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_out_of_range_answer_is_rejected() {
        let mut session = started(3, Locale::En);
        assert_eq!(
            session.answer_current(6),
            Transition::Rejected(ValidationError::AnswerOutOfRange { value: 6 })
        );
        assert_eq!(
            session.answer("s1", 0),
            Transition::Rejected(ValidationError::AnswerOutOfRange { value: 0 })
        );
        assert_eq!(session.step(), 0);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_last_answer_moves_to_nickname() {
        let mut session = started(3, Locale::En);
        session.answer_current(1);
        session.answer_current(2);
        assert_eq!(session.stage(), Stage::Questions);
        assert_eq!(
            session.answer_current(3),
            Transition::Advanced {
                stage: Stage::Nickname
            }
        );
        assert!(session.current_question().is_none());
        assert_eq!(session.answers().len(), 3);
    }

    #[test]
    fn test_questions_limit_restricts_flow() {
        let session = started(3, Locale::En);
        assert_eq!(session.total_questions(), 3);

        let session = started(0, Locale::En);
        assert_eq!(session.total_questions(), 30);
    }

    #[test]
    fn test_empty_nickname_becomes_anonymous() {
        let mut session = started(1, Locale::En);
        session.answer_current(5);
        assert_eq!(
            session.set_nickname(""),
            Transition::Advanced {
                stage: Stage::Emoji
            }
        );
        assert_eq!(session.nickname(), Some("Anonymous"));
    }

    #[test]
    fn test_invalid_emoji_keeps_stage() {
        let mut session = started(1, Locale::En);
        session.answer_current(5);
        session.set_nickname("neo");

        assert_eq!(
            session.set_emoji("hello"),
            Transition::Rejected(ValidationError::InvalidEmoji)
        );
        assert_eq!(session.stage(), Stage::Emoji);

        session.set_emoji("🦊");
        assert_eq!(session.stage(), Stage::Slogan);
        assert_eq!(session.emoji(), Some("🦊"));
    }

    #[test]
    fn test_strict_nickname_rejection_keeps_stage() {
        let flow = Arc::new(SurveyFlow::new(
            1,
            ProfileLimits::default(),
            NicknamePolicy::Strict,
        ));
        let mut session = SurveySession::new(flow, Locale::En);
        session.start(Locale::En);
        session.answer_current(3);

        assert_eq!(
            session.set_nickname("<script>"),
            Transition::Rejected(ValidationError::InvalidNickname { max: 20 })
        );
        assert_eq!(session.stage(), Stage::Nickname);
    }

    #[test]
    fn test_full_flow_completes_with_score() {
        // s1 answered 1 (social), e1 answered 5 (economic).
        let mut session = SurveySession::new(flow(0), Locale::Ua);
        session.start(Locale::Ua);
        for question in session.flow().questions.clone().iter() {
            let value = if question.key == "e1" { 5 } else if question.key == "s1" { 1 } else { 3 };
            assert!(!session.answer(question.key, value).is_ignored());
        }
        assert_eq!(session.stage(), Stage::Nickname);
        session.set_nickname("Skip ➡️");
        session.set_emoji("🐼");

        let Transition::Completed(done) = session.set_slogan("Пропустити ➡️") else {
            panic!("survey should complete");
        };
        assert_eq!(session.stage(), Stage::Done);
        assert_eq!(done.locale, Locale::Ua);
        assert_eq!(done.nickname, "Анонімний користувач");
        assert_eq!(done.emoji, "🐼");
        assert_eq!(done.slogan, "");
        assert_eq!(done.answers.len(), 30);

        let record = done.to_new_result();
        assert_eq!(record.slogan, None);
        assert_eq!(record.language, Locale::Ua);
        assert!((record.x - done.score.x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_minimal_scoring_scenario() {
        let flow = Arc::new(SurveyFlow {
            questions: crate::question::QuestionSet::new(
                crate::question::QUESTIONS
                    .iter()
                    .filter(|q| matches!(q.key, "s1" | "s2" | "e1" | "e2"))
                    .cloned()
                    .collect(),
            ),
            ..SurveyFlow::default()
        });
        let mut session = SurveySession::new(flow, Locale::En);
        session.start(Locale::En);
        for (key, value) in [("s1", 1), ("s2", 5), ("e1", 3), ("e2", 3)] {
            session.answer(key, value);
        }
        session.set_nickname("a");
        session.set_emoji("🦊");

        let Transition::Completed(done) = session.set_slogan("Liberty") else {
            panic!("survey should complete");
        };
        assert_eq!(done.score.x, 50.0);
        assert_eq!(done.score.y, 50.0);
        assert_eq!(done.score.quadrant, Quadrant::TopRight);
        assert_eq!(done.to_new_result().slogan.as_deref(), Some("Liberty"));
    }

    #[test]
    fn test_done_ignores_further_input() {
        let mut session = started(1, Locale::En);
        session.answer_current(2);
        session.set_nickname("neo");
        session.set_emoji("🦊");
        assert!(session.set_slogan("x").is_completed());

        assert!(session.set_slogan("y").is_ignored());
        assert!(session.answer_current(1).is_ignored());
        assert_eq!(session.stage(), Stage::Done);
    }

    #[test]
    fn test_reset_from_any_stage() {
        let mut session = started(2, Locale::En);
        session.answer_current(4);
        session.reset();

        assert_eq!(session.stage(), Stage::NotStarted);
        assert_eq!(session.step(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.locale(), Locale::En);

        session.start(Locale::Ua);
        assert_eq!(session.current_question().map(|q| q.key), Some("s1"));
    }

    #[test]
    fn test_preview_score_tracks_answers() {
        let mut session = started(0, Locale::En);
        assert_eq!(session.preview_score().x, 0.0);
        session.answer_current(5);
        // Only s1 answered: social axis at 100, economic still empty.
        let preview = session.preview_score();
        assert_eq!(preview.y, 100.0);
        assert_eq!(preview.x, 0.0);
    }
}
