//! The static content catalog.
//!
//! Every array here is authored at compile time and read-only for the
//! lifetime of the page. Only `Project` carries an identity field; nothing
//! else is ever looked up by key.

use super::types::{
    Certification, CodingProfile, EducationEntry, EducationStatus, Highlight, Icon, Project,
    SectionId, Skill, SkillCategory,
};

// ── Brand / hero copy ────────────────────────────────────────────────

pub const BRAND: &str = "ANIMADIK";
pub const HERO_BADGE: &str = "B.Tech CSE Student";
pub const HERO_NAME: &str = "Animadik Singh";
pub const HERO_TAGLINE: &str = "Crafting immersive digital experiences. Full Stack Developer \
    & Competitive Programmer building the future of the web with React & AI.";
pub const LINKEDIN_URL: &str = "https://in.linkedin.com/in/animadik-singh-36166031a";
pub const GITHUB_URL: &str = "https://github.com/AnimadikSingh";

// ── Skills ───────────────────────────────────────────────────────────

const LANGUAGES: [Skill; 5] = [
    Skill { name: "Python", icon: Icon::Terminal, color: "#3776AB", tag: ".py" },
    Skill { name: "Java", icon: Icon::Coffee, color: "#E76F00", tag: ".java" },
    Skill { name: "TypeScript", icon: Icon::FileJson, color: "#3178C6", tag: ".ts" },
    Skill { name: "JavaScript", icon: Icon::FileJson, color: "#F7DF1E", tag: ".js" },
    Skill { name: "C++", icon: Icon::Code2, color: "#00599C", tag: ".cpp" },
];

const FRONTEND: [Skill; 4] = [
    Skill { name: "React", icon: Icon::Layout, color: "#61DAFB", tag: "JSX" },
    Skill { name: "Next.js", icon: Icon::Layout, color: "#FFFFFF", tag: "SSR" },
    Skill { name: "Three.js", icon: Icon::Box, color: "#FFFFFF", tag: "WebGL" },
    Skill { name: "Tailwind", icon: Icon::Layers, color: "#38B2AC", tag: "CSS" },
];

const BACKEND: [Skill; 4] = [
    Skill { name: "SQL", icon: Icon::Database, color: "#4479A1", tag: "DB" },
    Skill { name: "MongoDB", icon: Icon::Server, color: "#47A248", tag: "NoSQL" },
    Skill { name: "Git", icon: Icon::GitBranch, color: "#F05032", tag: "VCS" },
    Skill { name: "VS Code", icon: Icon::Terminal, color: "#007ACC", tag: "IDE" },
];

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory { title: "Languages", skills: &LANGUAGES },
    SkillCategory { title: "Frontend & 3D", skills: &FRONTEND },
    SkillCategory { title: "Backend & Tools", skills: &BACKEND },
];

// ── Highlights ───────────────────────────────────────────────────────

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight { label: "Projects Done", value: "8+", icon: Icon::FolderGit2, color: "#00D9FF" },
    Highlight { label: "Hackathons", value: "10+", icon: Icon::Trophy, color: "#FFD700" },
    Highlight { label: "Exploring", value: "AI / ML", icon: Icon::BrainCircuit, color: "#9D4EDD" },
    Highlight { label: "Learning", value: "GenAI & LLMs", icon: Icon::Sparkles, color: "#FF0055" },
];

// ── Education ────────────────────────────────────────────────────────

pub static EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        title: "B.Tech in CSE",
        institution: "GLA University, Mathura",
        description: Some(
            "Pursuing Computer Science and Engineering with a focus on Full Stack \
             Development and DSA.",
        ),
        grade: None,
        status: EducationStatus::Present,
        kind: "University",
        icon: Icon::GraduationCap,
        color: "#00D9FF",
    },
    EducationEntry {
        title: "Class XII (CBSE)",
        institution: "Delhi Public School, Kalyanpur",
        description: None,
        grade: Some("80%"),
        status: EducationStatus::Completed,
        kind: "High School",
        icon: Icon::School,
        color: "#9D4EDD",
    },
    EducationEntry {
        title: "Class X (CBSE)",
        institution: "Delhi Public School, Kalyanpur",
        description: None,
        grade: Some("90%"),
        status: EducationStatus::Completed,
        kind: "Secondary School",
        icon: Icon::BookOpen,
        color: "#FF0055",
    },
];

// ── Coding profiles ──────────────────────────────────────────────────

pub static PROFILES: [CodingProfile; 3] = [
    CodingProfile {
        name: "LeetCode",
        specialty: "Algorithms",
        link: "https://leetcode.com/u/Animadik/",
        icon: Icon::Code,
        color: "#FFA116",
        gradient: "from-[#FFA116]/20 to-transparent",
    },
    CodingProfile {
        name: "GeeksForGeeks",
        specialty: "Data Structures",
        link: "https://www.geeksforgeeks.org/profile/animadiksryri?tab=overview",
        icon: Icon::Terminal,
        color: "#2F8D46",
        gradient: "from-[#2F8D46]/20 to-transparent",
    },
    CodingProfile {
        name: "CodeForces",
        specialty: "Contests",
        link: "https://codeforces.com/profile/Animadik",
        icon: Icon::BarChart2,
        color: "#1F8ACB",
        gradient: "from-[#1F8ACB]/20 to-transparent",
    },
];

// ── Certifications ───────────────────────────────────────────────────

pub static CERTIFICATIONS: [Certification; 2] = [
    Certification {
        title: "Young Turks Achievement",
        issuer: "Naukri.com",
        date: "2025",
        link: "https://www.naukri.com/campus/certificates/young_turks25_round_1_achievement/v0/68d9be7cabe8a1724df79091?utm_source=certificate&utm_medium=copy&utm_campaign=68d9be7cabe8a1724df79091",
        icon: Icon::Award,
        color: "#FF6B6B",
        description: "Recognized for top-tier problem solving skills in Round 1.",
        badge: "Round 1",
    },
    Certification {
        title: "NPTEL Certification",
        issuer: "IIT / NPTEL",
        date: "2024",
        link: "https://drive.google.com/file/d/18_jNyjoYICg0bnhcbYRRHTT45QWXkJoo/view?usp=sharing",
        icon: Icon::BadgeCheck,
        color: "#4CC9F0",
        description: "Advanced level certification with Elite status.",
        badge: "Elite",
    },
];

// ── Projects ─────────────────────────────────────────────────────────

pub static PROJECTS: [Project; 5] = [
    Project {
        id: 1,
        title: "MEDIBUDDY",
        description: "An intelligent medical analysis platform designed to track health data \
            and interpret medical reports. Features condition-based alerts, emergency \
            notifications, and a professional dashboard with an integrated AI chatbot for \
            health monitoring.",
        tags: &["React", "TypeScript", "HealthTech", "AI Integration"],
        link: "https://github.com/AnimadikSingh/Medical-Report-Summary",
        icon: Icon::Activity,
        color: "#00D9FF",
    },
    Project {
        id: 2,
        title: "AlgoVisualizer",
        description: "Interactive pathfinding and sorting algorithm visualizer. Demonstrates \
            complex data structure algorithms like Dijkstra, A*, QuickSort, and MergeSort in \
            real-time with adjustable speed and input size controls.",
        tags: &["React", "Algorithms", "DSA", "Interactive"],
        link: "https://github.com/AnimadikSingh",
        icon: Icon::BarChart2,
        color: "#FFD700",
    },
    Project {
        id: 3,
        title: "TaskFlow Manager",
        description: "A comprehensive project management tool featuring drag-and-drop Kanban \
            boards, team collaboration features, and real-time updates. Built with the MERN \
            stack to ensure seamless synchronization across devices.",
        tags: &["MERN Stack", "Socket.io", "MongoDB", "Redux"],
        link: "https://github.com/AnimadikSingh",
        icon: Icon::CheckSquare,
        color: "#FF0055",
    },
    Project {
        id: 4,
        title: "MusicFy",
        description: "An immersive AI-powered music streaming experience. Generates mood-based \
            playlists using OpenAI, features real-time lyrics synchronization, and includes a \
            WebGL audio visualizer. Designed for a seamless, high-fidelity listening session.",
        tags: &["React", "OpenAI API", "Web Audio", "Tailwind"],
        link: "https://github.com/AnimadikSingh",
        icon: Icon::Music,
        color: "#10B981",
    },
    Project {
        id: 5,
        title: "Animadik Portfolio",
        description: "The immersive 3D experience you are viewing right now. A high-performance \
            personal portfolio with a WebAssembly-rendered background scene, physics-based \
            tilt animations, and a custom glassmorphism design system.",
        tags: &["Rust", "WebAssembly", "Canvas", "Glassmorphism"],
        link: "https://github.com/AnimadikSingh",
        icon: Icon::Layers,
        color: "#9D4EDD",
    },
];

/// Sections rendered below the hero, in page order.
pub const SECTION_ORDER: [SectionId; 4] = [
    SectionId::About,
    SectionId::Work,
    SectionId::Achievements,
    SectionId::Contact,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_unique_across_catalog() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in PROJECTS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate project id {}", a.id);
            }
        }
    }

    #[test]
    fn five_seeded_projects() {
        assert_eq!(PROJECTS.len(), 5);
        for project in PROJECTS.iter() {
            assert!(!project.title.is_empty());
            assert!(!project.tags.is_empty());
            assert!(project.link.starts_with("https://"));
        }
    }

    #[test]
    fn section_order_follows_enum_minus_home() {
        let expected: Vec<SectionId> = SectionId::ALL
            .iter()
            .copied()
            .filter(|s| *s != SectionId::Home)
            .collect();
        assert_eq!(SECTION_ORDER.to_vec(), expected);
    }

    #[test]
    fn education_grades_match_status() {
        // Only completed entries carry a grade; the ongoing one carries a description.
        for entry in EDUCATION.iter() {
            match entry.status {
                EducationStatus::Present => assert!(entry.description.is_some()),
                EducationStatus::Completed => assert!(entry.grade.is_some()),
            }
        }
    }

    #[test]
    fn outbound_links_are_absolute() {
        for p in PROFILES.iter() {
            assert!(p.link.starts_with("https://"));
        }
        for c in CERTIFICATIONS.iter() {
            assert!(c.link.starts_with("https://"));
        }
    }
}
