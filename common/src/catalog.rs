//! K-snack type catalog
//!
//! The ten fixed personality archetypes a face can be classified into.
//! This table is the single source of truth: the analysis prompt is
//! rendered from it and the result renderer looks display text up in it,
//! so the model and the UI can never drift apart.

/// One K-snack personality archetype (bilingual)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnackType {
    /// Single-letter classification id, "A" through "J"
    pub id: &'static str,
    pub vibe: &'static str,
    pub vibe_en: &'static str,
    pub snack: &'static str,
    pub snack_en: &'static str,
    /// Three K-stars of the same type, comma separated
    pub stars: &'static str,
    pub stars_en: &'static str,
    /// Definition the model uses as its analysis criterion
    pub definition: &'static str,
    pub definition_en: &'static str,
    /// Presentation hint only, not behaviorally significant
    pub color_class: &'static str,
}

const SNACK_TYPES: [SnackType; 10] = [
    SnackType {
        id: "A",
        vibe: "강렬한 중독성",
        vibe_en: "Intensely Addictive",
        snack: "매운 새우깡",
        snack_en: "Spicy Shrimp Crackers",
        stars: "(여자)아이들 소연, 현아, BTS 정국",
        stars_en: "Soyeon ((G)I-DLE), HyunA, Jungkook (BTS)",
        definition: "한번 빠지면 헤어날 수 없는 마성의 매력. 시선이 닿는 순간 주변을 압도하는 강력한 포스와 독보적인 카리스마.",
        definition_en: "A bewitching charm impossible to escape once drawn in. A commanding presence and singular charisma that dominates the room the moment eyes meet.",
        color_class: "text-red-400",
    },
    SnackType {
        id: "B",
        vibe: "부드럽고 달콤함",
        vibe_en: "Soft and Sweet",
        snack: "허니버터칩",
        snack_en: "Honey Butter Chips",
        stars: "박보검, 아이유, NCT 재현",
        stars_en: "Park Bo-gum, IU, Jaehyun (NCT)",
        definition: "보는 이에게 힐링을 선사하는 천상의 미소. 맑고 따뜻함을 잃지 않는 부드러운 분위기, 누구나 기댈 수 있는 편안함과 달콤함.",
        definition_en: "A heavenly smile that heals everyone who sees it. A gentle aura that never loses its clarity and warmth, with a comforting sweetness anyone can lean on.",
        color_class: "text-amber-300",
    },
    SnackType {
        id: "C",
        vibe: "새콤 톡톡 개성파",
        vibe_en: "Tangy Pop Individualist",
        snack: "자유시간",
        snack_en: "Free Time",
        stars: "세븐틴 부승관, 이영지, 이광수",
        stars_en: "Boo Seung-kwan (SEVENTEEN), Lee Young-ji, Lee Kwang-soo",
        definition: "예측 불가능한 유쾌함. 틀에 갇히지 않은 톡톡 튀는 아이디어와 넘치는 에너지. 지루할 틈 없이 주변을 즐겁게 하는 독특한 존재감.",
        definition_en: "Unpredictable cheerfulness. Sparkling ideas that refuse any mold and energy to spare, with a one-of-a-kind presence that never lets a dull moment in.",
        color_class: "text-lime-400",
    },
    SnackType {
        id: "D",
        vibe: "균형 잡힌 클래식함",
        vibe_en: "Balanced Classic",
        snack: "새우깡",
        snack_en: "Shrimp Crackers",
        stars: "이정재, 김혜수, 엑소 수호",
        stars_en: "Lee Jung-jae, Kim Hye-soo, Suho (EXO)",
        definition: "시간이 지나도 변치 않는 정석적인 아름다움과 안정감. 겉은 차분하지만 깊이 있는 신뢰감과 기품이 느껴져 언제나 호감을 주는 타입.",
        definition_en: "Textbook beauty and stability that time never wears down. Calm on the surface yet radiating deep trust and dignity, always leaving a good impression.",
        color_class: "text-sky-400",
    },
    SnackType {
        id: "E",
        vibe: "깊고 복합적인 풍미",
        vibe_en: "Deep and Complex Flavor",
        snack: "꼬북칩",
        snack_en: "Kkobuk Chips",
        stars: "김태리, 유아인, BTS RM",
        stars_en: "Kim Tae-ri, Yoo Ah-in, RM (BTS)",
        definition: "쉽게 정의할 수 없는 오묘한 매력. 겉모습보다 내면에 더 많은 이야기와 깊이를 품고 있어, 알면 알수록 새로운 복합적인 풍미.",
        definition_en: "A subtle charm that defies easy definition. More stories and depth inside than the surface lets on, revealing new layers the longer you look.",
        color_class: "text-emerald-400",
    },
    SnackType {
        id: "F",
        vibe: "바삭! 경쾌한 활동성",
        vibe_en: "Crisp and Lively",
        snack: "포카칩",
        snack_en: "Poca Chips",
        stars: "아이브 장원영, 배우 최우식, TXT 수빈",
        stars_en: "Jang Won-young (IVE), Choi Woo-shik, Soobin (TXT)",
        definition: "맑고 밝은 기운을 전달하는 트렌디세터. 활기차고 당당한 모습으로 시선을 사로잡으며, 등장하는 순간 분위기는 생기로 가득 차 오름.",
        definition_en: "A trendsetter radiating clear, bright energy. Captivating with a lively, confident manner, filling the air with vitality the moment they appear.",
        color_class: "text-yellow-300",
    },
    SnackType {
        id: "G",
        vibe: "쫀득! 끈기 있는 노력형",
        vibe_en: "Chewy Persistent Achiever",
        snack: "마이쮸",
        snack_en: "My Chew",
        stars: "유노윤호, 김연아, 배우 조정석",
        stars_en: "Yunho (TVXQ), Kim Yuna, Jo Jung-suk",
        definition: "포기하지 않는 단단한 끈기와 집중력. 목표를 향해 묵묵히 나아가는 모습에서 프로페셔널한 아우라가 느껴지며, 함께 하는 사람들에게 믿음을 줌.",
        definition_en: "Unyielding grit and focus that never gives up. A professional aura in the quiet march toward a goal, inspiring trust in everyone alongside.",
        color_class: "text-orange-400",
    },
    SnackType {
        id: "H",
        vibe: "촉촉한 반전 매력",
        vibe_en: "Moist Hidden Charm",
        snack: "초코파이",
        snack_en: "Choco Pie",
        stars: "차은우, 김선호, 아이유",
        stars_en: "Cha Eun-woo, Kim Seon-ho, IU",
        definition: "겉과 속이 다른 반전의 매력. 차가워 보이던 인상 뒤에 숨겨진 따뜻하고 감성적인 면모가 예상치 못한 순간에 큰 감동을 선사함.",
        definition_en: "A charm of contrasts between outside and in. A warm, tender side hidden behind a seemingly cool first impression, delivering a surprise at the least expected moment.",
        color_class: "text-rose-400",
    },
    SnackType {
        id: "I",
        vibe: "달콤 쌉쌀한 성숙미",
        vibe_en: "Bittersweet Maturity",
        snack: "빈츠",
        snack_en: "Binch",
        stars: "공유, 전지현, 엑소 카이",
        stars_en: "Gong Yoo, Jun Ji-hyun, Kai (EXO)",
        definition: "삶의 깊이가 느껴지는 성숙하고 우아한 분위기. 낭만적이지만 절제된 지적인 매력이 돋보이며, 커피 같은 깊은 여운을 남김.",
        definition_en: "A mature, graceful air with the depth of lived experience. Romantic yet restrained intellectual appeal, lingering like a good cup of coffee.",
        color_class: "text-purple-400",
    },
    SnackType {
        id: "J",
        vibe: "든든한 포용력",
        vibe_en: "Reliable Embrace",
        snack: "오징어땅콩",
        snack_en: "Squid Peanut Balls",
        stars: "유재석, 마동석, 송중기",
        stars_en: "Yoo Jae-suk, Ma Dong-seok, Song Joong-ki",
        definition: "모두를 아우르는 넓고 넉넉한 마음을 지닌 리더형 인상. 힘들 때 기댈 수 있는 편안하고 든든한 존재감으로, 안정과 활력을 동시에 제공함.",
        definition_en: "A leader's face with a wide, generous heart that embraces everyone. A steady, comforting presence to lean on in hard times, offering stability and vitality at once.",
        color_class: "text-teal-400",
    },
];

/// All ten snack types, in id order
pub fn snack_types() -> &'static [SnackType] {
    &SNACK_TYPES
}

/// Look a snack type up by classification id
///
/// Lookup is exact and case-sensitive; the model is instructed to return
/// a single uppercase letter. Unknown ids yield `None` and the caller is
/// expected to fail closed.
pub fn find_snack_type(id: &str) -> Option<&'static SnackType> {
    SNACK_TYPES.iter().find(|t| t.id == id)
}
