// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Fallible;
use crate::error::QuizError;
use crate::question::Question;
use crate::rng::TinyRng;
use crate::rng::sample;

/// One run through a randomized pool of questions.
///
/// The session owns its pool: a sample drawn from the full question set at
/// construction time, in presentation order. Progress and score only move
/// forward; once the last question has been advanced past, the session is
/// finished and stays finished. Restarting means building a new session.
pub struct QuizSession {
    pool: Vec<Question>,
    position: usize,
    score: usize,
    scored_current: bool,
}

impl QuizSession {
    /// Build a session from the full question set.
    ///
    /// `requested_count` of `None`, `Some(0)`, or anything at least the set
    /// size selects the whole set; otherwise that many distinct questions
    /// are drawn. The pool order is randomized in every case.
    pub fn new(
        questions: Vec<Question>,
        requested_count: Option<usize>,
        rng: &mut TinyRng,
    ) -> Fallible<QuizSession> {
        if questions.is_empty() {
            return Err(QuizError::invalid_configuration(
                "cannot build a quiz from zero questions",
            ));
        }
        let count = match requested_count {
            Some(count) if count > 0 && count < questions.len() => count,
            _ => questions.len(),
        };
        let pool = sample(questions, count, rng);
        Ok(QuizSession {
            pool,
            position: 0,
            score: 0,
            scored_current: false,
        })
    }

    /// The question at the current position, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.pool.get(self.position)
    }

    /// Compare `user_answer` against the current question's reference
    /// answer, after trimming and lower-casing both sides.
    ///
    /// A correct answer scores one point for the current position. Repeating
    /// a correct check at the same position still returns `true` but does
    /// not score again. On a finished session this is a no-op returning
    /// `false`.
    pub fn check_answer(&mut self, user_answer: &str) -> bool {
        let Some(question) = self.pool.get(self.position) else {
            return false;
        };
        let correct = normalize(user_answer) == normalize(question.german_answer());
        if correct && !self.scored_current {
            self.score += 1;
            self.scored_current = true;
        }
        correct
    }

    /// Move to the next question. No-op on a finished session.
    pub fn advance(&mut self) {
        if self.position < self.pool.len() {
            self.position += 1;
            self.scored_current = false;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.pool.len()
    }

    /// The current score and the pool size.
    pub fn score(&self) -> (usize, usize) {
        (self.score, self.pool.len())
    }

    pub fn total(&self) -> usize {
        self.pool.len()
    }

    /// 0-based index of the current question.
    pub fn position(&self) -> usize {
        self.position
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::Fallible;

    fn verbs() -> Vec<Question> {
        vec![
            Question::new("I eat", "essen", "Ich esse"),
            Question::new("You drink", "trinken", "Du trinkst"),
            Question::new("He plays", "spielen", "Er spielt"),
            Question::new("We go", "gehen", "Wir gehen"),
            Question::new("They buy", "kaufen", "Sie kaufen"),
        ]
    }

    fn session(requested: Option<usize>) -> QuizSession {
        let mut rng = TinyRng::from_seed(99);
        QuizSession::new(verbs(), requested, &mut rng).unwrap()
    }

    #[test]
    fn test_empty_question_set_is_rejected() {
        let mut rng = TinyRng::from_seed(1);
        let result = QuizSession::new(Vec::new(), None, &mut rng);
        assert!(matches!(
            result,
            Err(QuizError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(session(None).total(), 5);
        assert_eq!(session(Some(0)).total(), 5);
        assert_eq!(session(Some(3)).total(), 3);
        assert_eq!(session(Some(5)).total(), 5);
        assert_eq!(session(Some(17)).total(), 5);
    }

    #[test]
    fn test_pool_is_drawn_without_replacement() {
        let source: HashSet<Question> = verbs().into_iter().collect();
        for requested in [None, Some(2), Some(4)] {
            let mut quiz = session(requested);
            let mut seen = HashSet::new();
            while let Some(question) = quiz.current_question() {
                assert!(source.contains(question));
                assert!(seen.insert(question.clone()));
                quiz.advance();
            }
            assert_eq!(seen.len(), quiz.total());
        }
    }

    #[test]
    fn test_pool_order_is_randomized() {
        // Seed 99 reorders a five-element pool to [2, 1, 3, 4, 0].
        let quiz = session(None);
        let verbs: Vec<&str> = quiz.pool.iter().map(|q| q.german_verb()).collect();
        assert_eq!(
            verbs,
            vec!["spielen", "trinken", "gehen", "kaufen", "essen"]
        );
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut quiz = session(Some(1));
        let expected = quiz.current_question().unwrap().german_answer().to_string();
        assert!(quiz.check_answer(&expected));
        assert_eq!(quiz.score(), (1, 1));
    }

    #[test]
    fn test_wrong_answer_does_not_score() {
        let mut quiz = session(None);
        assert!(!quiz.check_answer("ganz falsch"));
        assert_eq!(quiz.score(), (0, 5));
    }

    #[test]
    fn test_answer_normalization() {
        let mut rng = TinyRng::from_seed(4);
        let questions = vec![Question::new("I eat", "essen", "Ich esse")];
        let mut quiz = QuizSession::new(questions, None, &mut rng).unwrap();
        assert!(quiz.check_answer("  ICH ESSE "));
    }

    #[test]
    fn test_empty_answer_is_just_wrong() {
        let mut quiz = session(None);
        assert!(!quiz.check_answer(""));
        assert!(!quiz.check_answer("   "));
        assert_eq!(quiz.score(), (0, 5));
    }

    #[test]
    fn test_resubmission_scores_once() {
        let mut quiz = session(Some(2));
        let expected = quiz.current_question().unwrap().german_answer().to_string();
        assert!(quiz.check_answer(&expected));
        assert!(quiz.check_answer(&expected));
        assert!(quiz.check_answer(&expected));
        assert_eq!(quiz.score(), (1, 2));
    }

    #[test]
    fn test_scoring_unlocks_after_advance() {
        let mut quiz = session(None);
        let first = quiz.current_question().unwrap().german_answer().to_string();
        assert!(quiz.check_answer(&first));
        quiz.advance();
        let second = quiz.current_question().unwrap().german_answer().to_string();
        assert!(quiz.check_answer(&second));
        assert_eq!(quiz.score(), (2, 5));
    }

    #[test]
    fn test_score_is_monotonic_and_bounded() {
        let mut quiz = session(None);
        let total = quiz.total();
        let mut last_score = 0;
        while !quiz.is_finished() {
            let answer = quiz.current_question().unwrap().german_answer().to_string();
            quiz.check_answer("wrong");
            quiz.check_answer(&answer);
            let (score, _) = quiz.score();
            assert!(score >= last_score);
            assert!(score <= total);
            last_score = score;
            quiz.advance();
        }
        assert_eq!(quiz.score(), (total, total));
    }

    #[test]
    fn test_finishes_after_exactly_total_advances() {
        let mut quiz = session(None);
        for _ in 0..quiz.total() {
            assert!(!quiz.is_finished());
            quiz.advance();
        }
        assert!(quiz.is_finished());
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut quiz = session(Some(2));
        quiz.advance();
        quiz.advance();
        assert!(quiz.is_finished());
        quiz.advance();
        quiz.advance();
        assert!(quiz.is_finished());
        assert_eq!(quiz.position(), 2);
    }

    #[test]
    fn test_finished_session_is_inert() {
        let mut quiz = session(Some(1));
        let answer = quiz.current_question().unwrap().german_answer().to_string();
        quiz.check_answer(&answer);
        quiz.advance();
        assert!(quiz.is_finished());
        assert!(quiz.current_question().is_none());
        assert!(!quiz.check_answer(&answer));
        quiz.advance();
        assert_eq!(quiz.score(), (1, 1));
        assert_eq!(quiz.position(), 1);
    }

    #[test]
    fn test_score_readable_at_any_point() -> Fallible<()> {
        let mut rng = TinyRng::from_seed(11);
        let quiz = QuizSession::new(verbs(), Some(3), &mut rng)?;
        assert_eq!(quiz.score(), (0, 3));
        Ok(())
    }

    #[test]
    fn test_sentinel_question_makes_a_valid_session() {
        let mut rng = TinyRng::from_seed(8);
        let questions = vec![Question::missing_source("questions.txt")];
        let quiz = QuizSession::new(questions, None, &mut rng).unwrap();
        assert_eq!(quiz.total(), 1);
        assert!(quiz.current_question().is_some());
    }
}
