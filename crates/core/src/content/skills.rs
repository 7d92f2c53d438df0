use folio_protocol::{Color, Gradient, Skill, SkillCategory};

// Tailwind 400/500/600 stops.
const GREEN_400: Color = Color::rgb8(0x4a, 0xde, 0x80);
const BLUE_400: Color = Color::rgb8(0x60, 0xa5, 0xfa);
const BLUE_500: Color = Color::rgb8(0x3b, 0x82, 0xf6);
const YELLOW_400: Color = Color::rgb8(0xfa, 0xcc, 0x15);
const ORANGE_500: Color = Color::rgb8(0xf9, 0x73, 0x16);
const CYAN_500: Color = Color::rgb8(0x06, 0xb6, 0xd4);
const PINK_400: Color = Color::rgb8(0xf4, 0x72, 0xb6);
const RED_500: Color = Color::rgb8(0xef, 0x44, 0x44);
const PURPLE_400: Color = Color::rgb8(0xc0, 0x84, 0xfc);
const PURPLE_500: Color = Color::rgb8(0xa8, 0x55, 0xf7);
const INDIGO_400: Color = Color::rgb8(0x81, 0x8c, 0xf8);
const INDIGO_500: Color = Color::rgb8(0x63, 0x66, 0xf1);
const TEAL_400: Color = Color::rgb8(0x2d, 0xd4, 0xbf);
const GREEN_500: Color = Color::rgb8(0x22, 0xc5, 0x5e);
const GRAY_400: Color = Color::rgb8(0x9c, 0xa3, 0xaf);
const GRAY_600: Color = Color::rgb8(0x4b, 0x55, 0x63);

pub static SKILLS: [Skill; 8] = [
    Skill {
        name: "Python",
        level: 85,
        category: SkillCategory::Programming,
        icon: "🐍",
        gradient: Gradient::new(GREEN_400, BLUE_500),
    },
    Skill {
        name: "JavaScript",
        level: 80,
        category: SkillCategory::Programming,
        icon: "⚡",
        gradient: Gradient::new(YELLOW_400, ORANGE_500),
    },
    Skill {
        name: "React",
        level: 75,
        category: SkillCategory::Frontend,
        icon: "⚛️",
        gradient: Gradient::new(BLUE_400, CYAN_500),
    },
    Skill {
        name: "HTML/CSS",
        level: 90,
        category: SkillCategory::Frontend,
        icon: "🎨",
        gradient: Gradient::new(PINK_400, RED_500),
    },
    Skill {
        name: "Power BI",
        level: 80,
        category: SkillCategory::Data,
        icon: "📊",
        gradient: Gradient::new(PURPLE_400, INDIGO_500),
    },
    Skill {
        name: "Data Analysis",
        level: 85,
        category: SkillCategory::Data,
        icon: "📈",
        gradient: Gradient::new(TEAL_400, GREEN_500),
    },
    Skill {
        name: "Machine Learning",
        level: 70,
        category: SkillCategory::Data,
        icon: "🤖",
        gradient: Gradient::new(INDIGO_400, PURPLE_500),
    },
    Skill {
        name: "Git",
        level: 75,
        category: SkillCategory::Tools,
        icon: "🔧",
        gradient: Gradient::new(GRAY_400, GRAY_600),
    },
];

/// Closing points under the skills grid.
pub static SKILL_SUMMARY: [(&str, &str); 3] = [
    ("Full-Stack", "End-to-end development capabilities"),
    ("Data Science", "Analytics and visualization expertise"),
    ("Innovation", "Creative problem-solving approach"),
];
