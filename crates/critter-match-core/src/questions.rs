//! The fixed question catalog.
//!
//! Thirty statements answered on a five-point agreement scale, five per
//! [`Dimension`]. A high raw answer to a reversed question points at the
//! *low* end of its dimension, so its response is flipped before scoring.

use schemars::JsonSchema;
use serde::Serialize;

use crate::dimension::Dimension::{
    Adventure, Emotional, Extroversion, Independence, Leadership, Planning,
};
use crate::dimension::{Dimension, SCALE_MAX, SCALE_MIN};

/// Stable question identifier (1..=30).
pub type QuestionId = u32;

/// A single quiz statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Question {
    /// Stable identifier, 1-based, in catalog order.
    pub id: QuestionId,
    /// Statement shown to the user.
    pub text: &'static str,
    /// Axis this question measures.
    pub dimension: Dimension,
    /// Whether the response is flipped about the scale midpoint.
    pub reversed: bool,
}

impl Question {
    /// Effective score contributed by `response`.
    ///
    /// Reversed questions contribute `6 - response`. No range check is made;
    /// out-of-range responses propagate arithmetically.
    pub fn effective_score(&self, response: i32) -> f64 {
        let response = f64::from(response);
        if self.reversed {
            f64::from(SCALE_MIN + SCALE_MAX) - response
        } else {
            response
        }
    }
}

/// Labels for the five answer options, lowest first.
pub const ANSWER_LABELS: [(i32, &str); 5] = [
    (1, "전혀 아니다"),
    (2, "아니다"),
    (3, "보통이다"),
    (4, "그렇다"),
    (5, "매우 그렇다"),
];

const fn q(id: QuestionId, text: &'static str, dimension: Dimension, reversed: bool) -> Question {
    Question {
        id,
        text,
        dimension,
        reversed,
    }
}

/// Every question, in the order it is asked.
pub static QUESTIONS: [Question; 30] = [
    // High = extroverted
    q(1, "새로운 사람들을 만나는 것이 즐겁다", Extroversion, false),
    q(2, "파티나 모임에서 에너지를 얻는다", Extroversion, false),
    q(3, "혼자 있는 시간이 꼭 필요하다", Extroversion, true),
    q(4, "대화를 먼저 시작하는 편이다", Extroversion, false),
    q(5, "조용한 환경에서 더 집중이 잘 된다", Extroversion, true),
    // High = emotional
    q(6, "결정을 내릴 때 감정을 중요하게 고려한다", Emotional, false),
    q(7, "다른 사람의 감정에 쉽게 공감한다", Emotional, false),
    q(8, "논리와 사실에 기반해 판단하는 것이 옳다고 생각한다", Emotional, true),
    q(9, "감동적인 영화나 이야기에 눈물을 흘리는 편이다", Emotional, false),
    q(10, "객관적인 분석이 직감보다 중요하다", Emotional, true),
    // High = planner
    q(11, "일정을 미리 계획하는 것을 좋아한다", Planning, false),
    q(12, "갑작스러운 변화가 불편하다", Planning, false),
    q(13, "즉흥적인 여행을 떠나는 것이 재미있다", Planning, true),
    q(14, "할 일 목록을 작성하고 체크하는 것을 좋아한다", Planning, false),
    q(15, "마감 직전에 일을 처리하는 경우가 많다", Planning, true),
    // High = leader
    q(16, "그룹에서 자연스럽게 리더 역할을 맡게 된다", Leadership, false),
    q(17, "의견이 다를 때 내 주장을 강하게 펼친다", Leadership, false),
    q(18, "다른 사람의 의견을 따르는 것이 편하다", Leadership, true),
    q(19, "중요한 결정은 내가 직접 내리고 싶다", Leadership, false),
    q(20, "팀에서 조화를 유지하는 것이 가장 중요하다", Leadership, true),
    // High = adventure-seeking
    q(21, "새로운 도전을 하는 것이 두렵지 않다", Adventure, false),
    q(22, "안정적인 직장이 모험적인 기회보다 좋다", Adventure, true),
    q(23, "익숙하지 않은 음식도 기꺼이 먹어본다", Adventure, false),
    q(24, "위험을 감수하더라도 새로운 경험을 추구한다", Adventure, false),
    q(25, "예측 가능한 일상이 편안하다", Adventure, true),
    // High = independent
    q(26, "혼자서 문제를 해결하는 것을 선호한다", Independence, false),
    q(27, "중요한 결정 전에 주변 사람들의 조언을 구한다", Independence, true),
    q(28, "다른 사람의 도움 없이도 잘 해낼 수 있다", Independence, false),
    q(29, "함께 일할 때 더 좋은 결과가 나온다", Independence, true),
    q(30, "나만의 방식대로 일하는 것이 효율적이다", Independence, false),
];

/// Look up a question by id.
pub fn question(id: QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Questions measuring `dimension`, in catalog order.
pub fn questions_for(dimension: Dimension) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.dimension == dimension)
}
