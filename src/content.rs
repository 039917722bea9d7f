//! Static copy for the landing page. Read by length and index only.

pub const DIAGNOSTIC_CARDS: [&str; 3] = ["후성유전 나이", "마이크로바이옴 점수", "코르티솔 최적화"];

pub const TELEMETRY_MESSAGES: [&str; 3] = [
    "일주기 리듬 최적화 중...",
    "신경-내분비 노이즈 정렬 중...",
    "회복 탄성 메타볼릭 패턴 계산 중...",
];

pub const WEEK_DAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Day highlighted in the mock scheduler.
pub const SCHEDULED_DAY: usize = 4;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#philosophy", label: "Philosophy" },
    NavLink { href: "#protocols", label: "Protocols" },
    NavLink { href: "#membership", label: "Membership" },
];

pub struct HeroCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub accent: &'static str,
    pub body: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    eyebrow: "HIGH-END ORGANIC TECH · CLINIC BOUTIQUE",
    title: "자연이",
    accent: "알고리즘이다.",
    body: "생물학 신호를 임상적 해상도의 결정으로 전환하는 오케스트레이션 엔진. Nura는 몸의 언어를 읽고 삶의 리듬을 설계합니다.",
    image_url: "https://images.unsplash.com/photo-1473773508845-188df298d2d1?auto=format&fit=crop&w=2200&q=80",
    image_alt: "숲의 어두운 텍스처",
};

pub const MANIFEST: [&str; 2] = [
    "현대 의학은 묻는다: 무엇이 잘못되었는가?",
    "우리는 묻는다: 무엇이 최적인가?",
];

pub const PROTOCOL_TITLES: [&str; 3] = [
    "ROTARY DOUBLE HELIX GEAR",
    "LASER SCAN ON MEDICAL CELL GRID",
    "PULSE EKG WAVEFORM",
];

pub const EKG_PATH: &str =
    "M0 60 L60 60 L86 25 L110 78 L135 18 L165 60 L212 60 L238 36 L264 82 L302 60 L360 60";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
    pub featured: bool,
}

pub const MEMBERSHIP_TIERS: [Tier; 3] = [
    Tier {
        name: "Foundation",
        price: "₩390,000/mo",
        blurb: "정밀 데이터 리포트 & 주기별 프로토콜",
        featured: false,
    },
    Tier {
        name: "Performance",
        price: "₩760,000/mo",
        blurb: "최적화 코어 + 라이브 의료 코칭",
        featured: true,
    },
    Tier {
        name: "Sovereign",
        price: "₩1,420,000/mo",
        blurb: "정밀 데이터 리포트 & 주기별 프로토콜",
        featured: false,
    },
];
