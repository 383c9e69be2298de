use crate::domain::model::{
    Category, ContactDetail, Education, Experience, Highlight, Language, PortfolioItem, Skill,
    SkillCategory, SkillKind, SocialLink, Stat,
};

pub const OWNER_NAME: &str = "Youssef Yaakoubi";
pub const HEADLINE: &str = "Indie Game Developer";
pub const TAGLINE: &str = "Crafting immersive gaming experiences through code, design, and music. \
Turning creative visions into interactive realities.";
pub const AVAILABILITY: &str = "Available for collaborations";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am Yaakoubi Youssef an indie game developer passionate about creating original gameplay, \
unique mechanics, and immersive experiences. I work with GDScript, C++, and multiple game engines.",
    "Beyond coding, I design visuals, compose original melodies, and create full soundtracks \
using guitar and piano, including writing lyrics. This multidisciplinary approach allows \
me to craft cohesive experiences where every element—from gameplay to audio—tells a unified story.",
    "I consider myself a multidisciplinary artist: programmer, designer, musician, and creative \
storyteller. My goal is to push the boundaries of interactive entertainment and create games \
that leave lasting impressions.",
];

pub const CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative ideas, or \
opportunities to be part of your vision. Whether you need a game developer, musician, or \
creative collaborator—let's talk!";

pub const EDUCATION_NOTE: &str = "Beyond formal education, I continuously expand my skills through \
online courses, documentation, game jams, and hands-on projects. Learning never stops in game development!";

pub static PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "The Maze Killer",
        description: "Teleport, explode, and get lost in endless mazes—good luck finding your way out!",
        category: Category::Games,
        image: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=600&q=80",
        tags: &["Godot", "GDScript", "2D Platformer"],
        url: "https://jackubs.github.io/yaakoubi/",
    },
    PortfolioItem {
        id: 2,
        title: "Blink Out",
        description: "Your Eyes Are the Controller 👁️",
        category: Category::Games,
        image: "public/jackubs logo.png",
        tags: &["Godot", "GDScript", "Puzzle"],
        url: "https://jackubs.github.io/yaakoubi/",
    },
    PortfolioItem {
        id: 4,
        title: "Gameplay & Video Edits",
        description: "I create short gameplay videos and edit them with custom montages as a hobby I truly enjoy.",
        category: Category::Art,
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=600&q=80",
        tags: &["Gameplay", "Editing", "Montage"],
        url: "https://www.instagram.com/reel/DP67PiUjBrO/",
    },
    PortfolioItem {
        id: 5,
        title: " My Band ",
        description: "An original soundtrack featuring ambient electronic and acoustic compositions.",
        category: Category::Music,
        image: "public/band.jpg",
        tags: &["Guitar", "Piano", "Electronic"],
        url: "https://www.instagram.com/jawna_behiiii/",
    },
    PortfolioItem {
        id: 6,
        title: "Game Soundscapes",
        description: "Original game music compositions spanning various genres and moods.",
        category: Category::Music,
        image: "https://images.unsplash.com/photo-1507838153414-b4b713384a76?w=600&q=80",
        tags: &["OST", "Ambient", "Orchestral"],
        url: "https://www.youtube.com/@jacob.8384",
    },
];

const fn skill(name: &'static str, level: u8, kind: SkillKind) -> Skill {
    Skill { name, level, kind }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Development",
        color: "skill-code",
        skills: &[
            skill("GDScript", 90, SkillKind::Code),
            skill("C++", 75, SkillKind::Code),
            skill("Godot Engine", 90, SkillKind::Code),
            skill("Unity (Basics)", 60, SkillKind::Code),
            skill("Game Prototyping", 85, SkillKind::Code),
        ],
    },
    SkillCategory {
        title: "Game Design",
        color: "accent",
        skills: &[
            skill("Game Mechanics", 85, SkillKind::Design),
            skill("Level Design", 80, SkillKind::Design),
            skill("Storytelling", 85, SkillKind::Design),
            skill("UI/UX Design", 70, SkillKind::Design),
        ],
    },
    SkillCategory {
        title: "Art & Music",
        color: "skill-music",
        skills: &[
            skill("Guitar", 80, SkillKind::Music),
            skill("Piano", 70, SkillKind::Music),
            skill("Music Composition", 75, SkillKind::Music),
            skill("Visual Design", 70, SkillKind::Music),
            skill("Lyrics Writing", 80, SkillKind::Music),
        ],
    },
    SkillCategory {
        title: "Soft Skills",
        color: "skill-other",
        skills: &[
            skill("Team Collaboration", 85, SkillKind::Other),
            skill("Communication", 90, SkillKind::Other),
            skill("Problem Solving", 85, SkillKind::Other),
            skill("Project Management", 70, SkillKind::Other),
        ],
    },
    SkillCategory {
        title: "Hobbies",
        color: "skill-code",
        skills: &[
            skill("Writing Books", 90, SkillKind::Other),
            skill("Playing Chess", 85, SkillKind::Other),
        ],
    },
];

pub static LANGUAGES: &[Language] = &[
    Language { name: "Arabic", level: "Native", percent: 100 },
    Language { name: "French", level: "Fluent", percent: 90 },
    Language { name: "English", level: "Advanced", percent: 85 },
    Language { name: "Russian", level: "Learning", percent: 30 },
    Language { name: "Spanish", level: "Learning", percent: 25 },
];

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        id: 1,
        title: "Indie Game Developer",
        company: None,
        period: "2020 - Present",
        description: "Creating original games and interactive experiences from concept to completion.",
        highlights: &[
            "Developed multiple indie games and tech prototypes",
            "Designed unique gameplay mechanics and systems",
            "Created full game soundtracks and visual assets",
            "Managed complete game development lifecycle",
        ],
    },
    Experience {
        id: 2,
        title: "Music Band Leader",
        company: None,
        period: "2019 - 2022",
        description: "Founded and led a music band, handling creative direction and composition.",
        highlights: &[
            "Composed original music and wrote lyrics",
            "Coordinated band members and rehearsals",
            "Performed live and recorded studio sessions",
            "Managed creative vision and band identity",
        ],
    },
    Experience {
        id: 3,
        title: "Call Center Agent",
        company: Some("Hay Khathra Elka Consulting"),
        period: "Work Experience",
        description: "Customer service and telecommunications support role.",
        highlights: &[
            "Handled customer inquiries and support",
            "Developed strong communication skills",
            "Worked in fast-paced environment",
            "Multi-language customer support",
        ],
    },
    Experience {
        id: 4,
        title: "Collaborative Projects",
        company: None,
        period: "Ongoing",
        description: "Worked with various teams and individuals on creative and technical projects.",
        highlights: &[
            "Collaborated with artists and developers",
            "Participated in game jams and hackathons",
            "Contributed to open-source projects",
            "Built network of creative professionals",
        ],
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        id: 1,
        degree: "BTP - Telecommunications & Networks",
        institution: "Hay Khathra",
        status: "Currently Studying",
        description: "Brevet Technicien Professionnel focusing on telecommunications infrastructure and network systems.",
        courses: &[
            "Network Fundamentals",
            "Telecommunications Systems",
            "Technical Communication",
            "Infrastructure Management",
        ],
    },
    Education {
        id: 2,
        degree: "BTS - Computer Networking",
        institution: "Preparation",
        status: "Upcoming",
        description: "Brevet Technicien Supérieur with focus on advanced computer networking and system administration.",
        courses: &[
            "Advanced Networking",
            "System Administration",
            "Network Security",
            "Project Management",
        ],
    },
];

pub static ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Creative Vision",
        description: "Transforming ideas into immersive digital experiences",
    },
    Highlight {
        title: "Technical Skills",
        description: "GDScript, C++, Godot, Unity, and web technologies",
    },
    Highlight {
        title: "Innovation",
        description: "Always exploring new mechanics and storytelling methods",
    },
    Highlight {
        title: "Passion",
        description: "Dedicated to crafting memorable player experiences",
    },
];

pub static TALENTS: &[&str] = &["Developer", "Game Designer", "Musician"];

pub static CV_STATS: &[Stat] = &[
    Stat { value: "4+", label: "Years Experience" },
    Stat { value: "10+", label: "Projects" },
    Stat { value: "5", label: "Languages" },
    Stat { value: "∞", label: "Passion" },
];

pub static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Email", value: "youssef.yakoubbi@gmail.com" },
    ContactDetail { label: "Location", value: "Ariana, Tunisie" },
    ContactDetail { label: "Response Time", value: "Within 24 hours" },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", href: "#" },
    SocialLink { name: "LinkedIn", href: "#" },
    SocialLink { name: "Twitter", href: "#" },
];
