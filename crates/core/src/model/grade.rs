use std::fmt;

//
// ─── LETTER BAND ──────────────────────────────────────────────────────────────
//

/// Discrete band for the combined grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeLetter {
    A,
    B,
    C,
    F,
}

impl GradeLetter {
    /// Band thresholds: `>= 90 -> A`, `>= 75 -> B`, `>= 50 -> C`, else `F`.
    #[must_use]
    pub fn from_combined(combined: u8) -> Self {
        if combined >= 90 {
            Self::A
        } else if combined >= 75 {
            Self::B
        } else if combined >= 50 {
            Self::C
        } else {
            Self::F
        }
    }

    /// Display label shown next to the letter.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GradeLetter::A => "Excellent!",
            GradeLetter::B => "Good Job!",
            GradeLetter::C => "Needs Improvement",
            GradeLetter::F => "Keep Practicing!",
        }
    }
}

impl fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            GradeLetter::A => "A",
            GradeLetter::B => "B",
            GradeLetter::C => "C",
            GradeLetter::F => "F",
        };
        f.write_str(letter)
    }
}

//
// ─── GRADE ────────────────────────────────────────────────────────────────────
//

/// Final weighted result of a completed interview.
///
/// Computed once from frozen session state and never mutated afterwards.
/// Recomputing from the same inputs is deterministic: no clock reads, no
/// randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    letter: GradeLetter,
    combined: u8,
    quiz_score: u32,
    total_questions: u32,
    integrity_score: u8,
    time_used_secs: u32,
}

impl Grade {
    /// Weight of quiz correctness in the combined grade.
    pub const QUIZ_WEIGHT: f64 = 0.6;
    /// Weight of the integrity score in the combined grade.
    pub const INTEGRITY_WEIGHT: f64 = 0.4;

    /// Blend quiz correctness and integrity into the combined grade.
    ///
    /// An empty question list yields a quiz percentage of zero; the session
    /// workflow never grades one, but the function stays total.
    #[must_use]
    pub fn compute(
        quiz_score: u32,
        total_questions: u32,
        integrity_score: u8,
        time_used_secs: u32,
    ) -> Self {
        let quiz_percent = if total_questions == 0 {
            0.0
        } else {
            f64::from(quiz_score) / f64::from(total_questions) * 100.0
        };
        let combined = (quiz_percent * Self::QUIZ_WEIGHT
            + f64::from(integrity_score) * Self::INTEGRITY_WEIGHT)
            .round()
            .clamp(0.0, 100.0) as u8;

        Self {
            letter: GradeLetter::from_combined(combined),
            combined,
            quiz_score,
            total_questions,
            integrity_score,
            time_used_secs,
        }
    }

    #[must_use]
    pub fn letter(&self) -> GradeLetter {
        self.letter
    }

    /// Weighted blend of quiz correctness (60%) and integrity (40%).
    #[must_use]
    pub fn combined(&self) -> u8 {
        self.combined
    }

    #[must_use]
    pub fn quiz_score(&self) -> u32 {
        self.quiz_score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn integrity_score(&self) -> u8 {
        self.integrity_score
    }

    /// Seconds of the allotment actually used.
    #[must_use]
    pub fn time_used_secs(&self) -> u32 {
        self.time_used_secs
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_of_ten_with_80_integrity_is_a_c() {
        let grade = Grade::compute(7, 10, 80, 600);
        assert_eq!(grade.combined(), 74);
        assert_eq!(grade.letter(), GradeLetter::C);
        assert_eq!(grade.time_used_secs(), 600);
    }

    #[test]
    fn nine_of_ten_with_95_integrity_is_an_a() {
        let grade = Grade::compute(9, 10, 95, 120);
        assert_eq!(grade.combined(), 92);
        assert_eq!(grade.letter(), GradeLetter::A);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        assert_eq!(GradeLetter::from_combined(90), GradeLetter::A);
        assert_eq!(GradeLetter::from_combined(89), GradeLetter::B);
        assert_eq!(GradeLetter::from_combined(75), GradeLetter::B);
        assert_eq!(GradeLetter::from_combined(74), GradeLetter::C);
        assert_eq!(GradeLetter::from_combined(50), GradeLetter::C);
        assert_eq!(GradeLetter::from_combined(49), GradeLetter::F);
    }

    #[test]
    fn perfect_session_is_a_full_a() {
        let grade = Grade::compute(10, 10, 100, 0);
        assert_eq!(grade.combined(), 100);
        assert_eq!(grade.letter(), GradeLetter::A);
        assert_eq!(grade.letter().label(), "Excellent!");
    }

    #[test]
    fn empty_question_list_does_not_divide_by_zero() {
        let grade = Grade::compute(0, 0, 100, 0);
        assert_eq!(grade.combined(), 40);
        assert_eq!(grade.letter(), GradeLetter::F);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let first = Grade::compute(5, 10, 70, 900);
        let second = Grade::compute(5, 10, 70, 900);
        assert_eq!(first, second);
    }
}
