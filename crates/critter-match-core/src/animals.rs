//! The fixed animal catalog.
//!
//! Each profile sits at a canonical point in the same six-dimensional space
//! as user scores. Matching compares the user's point against all twenty.

use schemars::JsonSchema;
use serde::Serialize;

use crate::dimension::DimensionScores;

/// One animal personality type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct AnimalProfile {
    /// Stable slug.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Emoji glyph.
    pub emoji: &'static str,
    /// Free-text description.
    pub description: &'static str,
    /// Trait tags.
    pub traits: &'static [&'static str],
    /// Canonical position in trait space.
    pub scores: DimensionScores,
}

/// Order: extroversion, emotional, planning, leadership, adventure, independence.
const fn scores(v: [f64; 6]) -> DimensionScores {
    DimensionScores {
        extroversion: v[0],
        emotional: v[1],
        planning: v[2],
        leadership: v[3],
        adventure: v[4],
        independence: v[5],
    }
}

/// Every animal profile, in matching order.
///
/// Matching breaks exact ties by this order, first entry wins.
pub static ANIMALS: [AnimalProfile; 20] = [
    AnimalProfile {
        id: "lion",
        name: "사자",
        emoji: "🦁",
        description: "무리를 이끄는 타고난 리더예요. 자신감 넘치고 결단력이 있어 모두가 자연스럽게 당신을 따릅니다.",
        traits: &["리더십", "자신감", "결단력"],
        scores: scores([4.5, 2.0, 3.5, 5.0, 4.0, 4.0]),
    },
    AnimalProfile {
        id: "dog",
        name: "강아지",
        emoji: "🐶",
        description: "누구와도 금방 친해지는 다정한 친구예요. 곁에 있는 사람들에게 늘 에너지와 위로를 줍니다.",
        traits: &["친화력", "충성심", "다정함"],
        scores: scores([5.0, 4.5, 2.5, 2.5, 3.5, 1.5]),
    },
    AnimalProfile {
        id: "cat",
        name: "고양이",
        emoji: "🐱",
        description: "자기만의 속도와 공간을 소중히 여겨요. 독립적이지만 마음을 연 사람에게는 깊은 애정을 보입니다.",
        traits: &["독립성", "신중함", "자기주도"],
        scores: scores([2.0, 3.0, 2.5, 3.0, 2.5, 5.0]),
    },
    AnimalProfile {
        id: "fox",
        name: "여우",
        emoji: "🦊",
        description: "상황을 빠르게 읽고 영리하게 움직이는 전략가예요. 계산된 한 수로 원하는 것을 얻어냅니다.",
        traits: &["영리함", "전략적", "순발력"],
        scores: scores([3.5, 2.0, 4.0, 3.5, 3.5, 4.0]),
    },
    AnimalProfile {
        id: "dolphin",
        name: "돌고래",
        emoji: "🐬",
        description: "밝고 유쾌한 분위기 메이커예요. 사람들과 어울리며 새로운 경험을 즐깁니다.",
        traits: &["사교성", "유쾌함", "호기심"],
        scores: scores([5.0, 4.0, 2.5, 3.0, 4.5, 2.0]),
    },
    AnimalProfile {
        id: "owl",
        name: "부엉이",
        emoji: "🦉",
        description: "조용히 관찰하고 깊이 생각하는 현자예요. 감정보다 논리로 판단하며 계획을 세웁니다.",
        traits: &["지혜", "분석력", "차분함"],
        scores: scores([1.5, 2.0, 4.5, 2.5, 2.0, 4.5]),
    },
    AnimalProfile {
        id: "rabbit",
        name: "토끼",
        emoji: "🐰",
        description: "섬세하고 따뜻한 마음을 가졌어요. 익숙한 환경에서 소중한 사람들과 함께할 때 가장 빛납니다.",
        traits: &["섬세함", "배려심", "온화함"],
        scores: scores([2.5, 4.5, 3.5, 1.5, 1.5, 2.0]),
    },
    AnimalProfile {
        id: "eagle",
        name: "독수리",
        emoji: "🦅",
        description: "높은 곳에서 멀리 내다보는 비전가예요. 혼자서도 거침없이 목표를 향해 날아갑니다.",
        traits: &["비전", "독립성", "추진력"],
        scores: scores([2.5, 1.5, 4.0, 4.5, 4.5, 5.0]),
    },
    AnimalProfile {
        id: "penguin",
        name: "펭귄",
        emoji: "🐧",
        description: "함께할 때 더 강해지는 팀 플레이어예요. 규칙적인 생활 속에서 동료들을 든든하게 챙깁니다.",
        traits: &["협동심", "성실함", "유대감"],
        scores: scores([4.0, 4.0, 4.0, 2.0, 2.0, 1.5]),
    },
    AnimalProfile {
        id: "wolf",
        name: "늑대",
        emoji: "🐺",
        description: "무리를 위해 앞장서는 책임감 있는 리더예요. 동료와의 신뢰를 무엇보다 중요하게 여깁니다.",
        traits: &["책임감", "리더십", "의리"],
        scores: scores([3.0, 2.5, 4.0, 4.5, 3.5, 2.5]),
    },
    AnimalProfile {
        id: "panda",
        name: "판다",
        emoji: "🐼",
        description: "느긋하고 여유로운 평화주의자예요. 서두르지 않고 자신만의 편안한 리듬을 지킵니다.",
        traits: &["여유", "평화주의", "느긋함"],
        scores: scores([2.0, 4.0, 1.5, 1.5, 1.5, 3.0]),
    },
    AnimalProfile {
        id: "monkey",
        name: "원숭이",
        emoji: "🐵",
        description: "호기심 가득한 장난꾸러기예요. 즉흥적인 아이디어로 주변을 늘 즐겁게 만듭니다.",
        traits: &["호기심", "재치", "활발함"],
        scores: scores([5.0, 3.5, 1.5, 3.0, 5.0, 2.5]),
    },
    AnimalProfile {
        id: "turtle",
        name: "거북이",
        emoji: "🐢",
        description: "꾸준함이 최고의 무기예요. 천천히, 그러나 확실하게 계획한 길을 끝까지 걸어갑니다.",
        traits: &["꾸준함", "인내심", "신중함"],
        scores: scores([1.5, 3.0, 5.0, 2.0, 1.0, 3.5]),
    },
    AnimalProfile {
        id: "bear",
        name: "곰",
        emoji: "🐻",
        description: "묵직하고 믿음직한 존재예요. 평소엔 조용하지만 필요할 때는 누구보다 강한 힘을 보여줍니다.",
        traits: &["듬직함", "포용력", "자립심"],
        scores: scores([2.5, 3.0, 3.0, 3.5, 2.5, 4.5]),
    },
    AnimalProfile {
        id: "squirrel",
        name: "다람쥐",
        emoji: "🐿️",
        description: "부지런하고 꼼꼼한 준비성의 달인이에요. 미리 챙겨두는 습관 덕분에 언제나 여유가 있습니다.",
        traits: &["부지런함", "준비성", "꼼꼼함"],
        scores: scores([3.5, 3.5, 5.0, 2.0, 2.0, 3.0]),
    },
    AnimalProfile {
        id: "tiger",
        name: "호랑이",
        emoji: "🐯",
        description: "강한 카리스마를 지닌 고독한 승부사예요. 스스로 결정하고 두려움 없이 도전합니다.",
        traits: &["카리스마", "용기", "독립성"],
        scores: scores([2.5, 2.0, 3.0, 5.0, 4.5, 5.0]),
    },
    AnimalProfile {
        id: "elephant",
        name: "코끼리",
        emoji: "🐘",
        description: "따뜻한 마음으로 무리를 보살피는 든든한 어른이에요. 한 번 맺은 인연은 절대 잊지 않습니다.",
        traits: &["포용력", "기억력", "보호본능"],
        scores: scores([3.0, 5.0, 4.0, 4.0, 2.0, 1.5]),
    },
    AnimalProfile {
        id: "koala",
        name: "코알라",
        emoji: "🐨",
        description: "편안한 자리에서 충분히 쉬어야 힘이 나는 타입이에요. 조용하고 순한 매력이 있습니다.",
        traits: &["순수함", "휴식", "편안함"],
        scores: scores([1.5, 3.5, 2.0, 1.5, 1.0, 2.0]),
    },
    AnimalProfile {
        id: "horse",
        name: "말",
        emoji: "🐴",
        description: "자유롭게 달리는 것을 사랑하는 모험가예요. 넓은 세상을 향한 열정이 멈추지 않습니다.",
        traits: &["자유", "열정", "활동성"],
        scores: scores([4.0, 3.0, 2.0, 2.5, 4.5, 3.5]),
    },
    AnimalProfile {
        id: "hamster",
        name: "햄스터",
        emoji: "🐹",
        description: "작지만 열심히 사는 귀여운 노력파예요. 다정한 사람들 곁에서 소소한 행복을 찾습니다.",
        traits: &["귀여움", "성실함", "소소한 행복"],
        scores: scores([2.0, 4.5, 4.0, 1.0, 2.5, 2.5]),
    },
];

/// Look up a profile by its slug.
pub fn animal(id: &str) -> Option<&'static AnimalProfile> {
    ANIMALS.iter().find(|a| a.id == id)
}
