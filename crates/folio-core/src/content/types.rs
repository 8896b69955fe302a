//! Record types for the static content catalog.
//!
//! Everything here is compile-time-authored data: `&'static` fields, no
//! runtime creation or destruction, no persistence.

/// Anchor identifiers for the page's navigable sections.
///
/// Every section root element is tagged with exactly one of these, and the
/// navigation bar links into a subset of them. Section order on the page
/// matches enum order, minus `Home` (which is the hero itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Work,
    Achievements,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Work,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    /// Stable DOM anchor string. Scroll-to-anchor depends on exact matches.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Work => "work",
            SectionId::Achievements => "achievements",
            SectionId::Contact => "contact",
        }
    }
}

/// Display icon, identified by its lucide icon name.
///
/// The web layer tags elements with `Icon::name()` and leaves glyph drawing
/// to the icon font/sprite sheet. Plain data, not a dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Activity,
    ArrowUpRight,
    Award,
    BadgeCheck,
    BarChart2,
    BookOpen,
    Box,
    Braces,
    BrainCircuit,
    CheckSquare,
    Code,
    Code2,
    Coffee,
    Cpu,
    Database,
    FileJson,
    FolderGit2,
    GitBranch,
    Github,
    GraduationCap,
    Layers,
    Layout,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Music,
    School,
    Send,
    Server,
    Sparkles,
    Terminal,
    Trophy,
    X,
}

impl Icon {
    /// Kebab-case lucide identifier.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Activity => "activity",
            Icon::ArrowUpRight => "arrow-up-right",
            Icon::Award => "award",
            Icon::BadgeCheck => "badge-check",
            Icon::BarChart2 => "bar-chart-2",
            Icon::BookOpen => "book-open",
            Icon::Box => "box",
            Icon::Braces => "braces",
            Icon::BrainCircuit => "brain-circuit",
            Icon::CheckSquare => "check-square",
            Icon::Code => "code",
            Icon::Code2 => "code-2",
            Icon::Coffee => "coffee",
            Icon::Cpu => "cpu",
            Icon::Database => "database",
            Icon::FileJson => "file-json",
            Icon::FolderGit2 => "folder-git-2",
            Icon::GitBranch => "git-branch",
            Icon::Github => "github",
            Icon::GraduationCap => "graduation-cap",
            Icon::Layers => "layers",
            Icon::Layout => "layout",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Menu => "menu",
            Icon::Music => "music",
            Icon::School => "school",
            Icon::Send => "send",
            Icon::Server => "server",
            Icon::Sparkles => "sparkles",
            Icon::Terminal => "terminal",
            Icon::Trophy => "trophy",
            Icon::X => "x",
        }
    }
}

/// A single technology badge inside a skill category.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    /// Accent color as a CSS hex string.
    pub color: &'static str,
    /// Short tag label shown next to the name (".py", "JSX", ...).
    pub tag: &'static str,
}

/// Titled, ordered group of skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationStatus {
    Present,
    Completed,
}

impl EducationStatus {
    pub fn label(self) -> &'static str {
        match self {
            EducationStatus::Present => "Present",
            EducationStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub title: &'static str,
    pub institution: &'static str,
    pub description: Option<&'static str>,
    pub grade: Option<&'static str>,
    pub status: EducationStatus,
    /// Type label ("University", "High School", ...).
    pub kind: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

/// Small stat chip ("Projects Done: 8+").
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

/// External coding-profile card (LeetCode and friends).
#[derive(Debug, Clone, Copy)]
pub struct CodingProfile {
    pub name: &'static str,
    pub specialty: &'static str,
    pub link: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    /// Gradient utility token applied to the card's hover glow.
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub link: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}

/// Portfolio project entry. `id` is unique and stable across the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_anchors_are_stable() {
        assert_eq!(SectionId::Home.as_str(), "home");
        assert_eq!(SectionId::About.as_str(), "about");
        assert_eq!(SectionId::Work.as_str(), "work");
        assert_eq!(SectionId::Achievements.as_str(), "achievements");
        assert_eq!(SectionId::Contact.as_str(), "contact");
    }

    #[test]
    fn section_anchors_are_distinct() {
        for (i, a) in SectionId::ALL.iter().enumerate() {
            for b in SectionId::ALL.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn icon_names_are_kebab_case() {
        assert_eq!(Icon::BarChart2.name(), "bar-chart-2");
        assert_eq!(Icon::GraduationCap.name(), "graduation-cap");
        assert!(!Icon::Trophy.name().contains(' '));
    }
}
