use serde::Serialize;
use utoipa::ToSchema;

use crate::theme::application::domain::ThemeId;

/// Page composition a theme is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Header navigation over a single column.
    Stacked,
    /// Navigation in a side column.
    Sidebar,
    /// Sections laid out as cards.
    Grid,
    /// Monospace prompt-style output.
    Console,
    /// Large hero column beside the content.
    Split,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stacked => "stacked",
            Self::Sidebar => "sidebar",
            Self::Grid => "grid",
            Self::Console => "console",
            Self::Split => "split",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub font: &'static str,
}

/// The closed set of portfolio themes. Theme `n` is mounted under `/v{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Minimal,
    Editorial,
    Brutalist,
    Terminal,
    Swiss,
    Neon,
    Paper,
    Bento,
    Magazine,
    Retro,
    Glass,
    Monochrome,
    Gallery,
    Timeline,
    Blueprint,
}

const SANS: &str = "'Inter', 'Helvetica Neue', Arial, sans-serif";
const SERIF: &str = "'Playfair Display', Georgia, serif";
const MONO: &str = "'JetBrains Mono', 'Fira Code', monospace";
const GROTESK: &str = "'Space Grotesk', 'Helvetica Neue', sans-serif";

impl ThemeKind {
    pub const ALL: [ThemeKind; ThemeId::MAX as usize] = [
        Self::Minimal,
        Self::Editorial,
        Self::Brutalist,
        Self::Terminal,
        Self::Swiss,
        Self::Neon,
        Self::Paper,
        Self::Bento,
        Self::Magazine,
        Self::Retro,
        Self::Glass,
        Self::Monochrome,
        Self::Gallery,
        Self::Timeline,
        Self::Blueprint,
    ];

    pub fn for_id(id: ThemeId) -> Self {
        Self::ALL[usize::from(id.get()) - 1]
    }

    pub fn id(self) -> ThemeId {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        ThemeId::all().nth(index).unwrap_or_else(|| Self::first_id())
    }

    fn first_id() -> ThemeId {
        ThemeId::all().next().unwrap_or_else(|| unreachable!("ThemeId::MAX is non-zero"))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Editorial => "Editorial",
            Self::Brutalist => "Brutalist",
            Self::Terminal => "Terminal",
            Self::Swiss => "Swiss",
            Self::Neon => "Neon",
            Self::Paper => "Paper",
            Self::Bento => "Bento",
            Self::Magazine => "Magazine",
            Self::Retro => "Retro",
            Self::Glass => "Glass",
            Self::Monochrome => "Monochrome",
            Self::Gallery => "Gallery",
            Self::Timeline => "Timeline",
            Self::Blueprint => "Blueprint",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Editorial => "editorial",
            Self::Brutalist => "brutalist",
            Self::Terminal => "terminal",
            Self::Swiss => "swiss",
            Self::Neon => "neon",
            Self::Paper => "paper",
            Self::Bento => "bento",
            Self::Magazine => "magazine",
            Self::Retro => "retro",
            Self::Glass => "glass",
            Self::Monochrome => "monochrome",
            Self::Gallery => "gallery",
            Self::Timeline => "timeline",
            Self::Blueprint => "blueprint",
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Self::Minimal | Self::Paper | Self::Monochrome | Self::Timeline => Layout::Stacked,
            Self::Editorial | Self::Magazine | Self::Swiss => Layout::Split,
            Self::Brutalist | Self::Bento | Self::Gallery | Self::Glass => Layout::Grid,
            Self::Terminal | Self::Retro => Layout::Console,
            Self::Neon | Self::Blueprint => Layout::Sidebar,
        }
    }

    pub fn palette(self) -> Palette {
        let (background, surface, text, accent, font) = match self {
            Self::Minimal => ("#ffffff", "#f5f5f5", "#111111", "#2f5bea", SANS),
            Self::Editorial => ("#fbf8f3", "#efe8dc", "#1f1a17", "#b0413e", SERIF),
            Self::Brutalist => ("#fffb00", "#ffffff", "#000000", "#ff2e00", GROTESK),
            Self::Terminal => ("#0c0c0c", "#161616", "#33ff66", "#33ff66", MONO),
            Self::Swiss => ("#ffffff", "#f0f0f0", "#000000", "#e30613", SANS),
            Self::Neon => ("#0d0221", "#1a0b3d", "#f5f3ff", "#ff00c8", GROTESK),
            Self::Paper => ("#f4efe6", "#ebe3d3", "#3b3024", "#8c6b3f", SERIF),
            Self::Bento => ("#f2f2f7", "#ffffff", "#1c1c1e", "#5e5ce6", SANS),
            Self::Magazine => ("#fdfdfd", "#f1ece4", "#141414", "#d1495b", SERIF),
            Self::Retro => ("#1d1b4f", "#2a2770", "#ffd866", "#ff6188", MONO),
            Self::Glass => ("#0f2027", "#203a43", "#e6f4f1", "#7fdbda", SANS),
            Self::Monochrome => ("#fafafa", "#e5e5e5", "#0a0a0a", "#0a0a0a", GROTESK),
            Self::Gallery => ("#ffffff", "#fafafa", "#222222", "#c47ac0", SANS),
            Self::Timeline => ("#f7f9fc", "#e8eef7", "#14213d", "#fca311", SANS),
            Self::Blueprint => ("#0b3d91", "#134aa8", "#e8f0ff", "#ffffff", MONO),
        };
        Palette {
            background,
            surface,
            text,
            accent,
            font,
        }
    }
}
