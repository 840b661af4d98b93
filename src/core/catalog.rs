//! Static catalogue of searchable corpora.
//!
//! Domains and stacks are closed enums. Each maps to a
//! [`CorpusDescriptor`] naming its CSV file and which columns are
//! searched and which are returned. Unknown keys are errors, never a
//! silent fallback.

use crate::core::error::{Result, UxlexError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-corpus configuration: where it lives and which fields matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusDescriptor {
    /// Source identity, relative to the data directory
    pub file: &'static str,
    /// Fields concatenated into the searchable document
    pub search_fields: &'static [&'static str],
    /// Fields projected into each result record, in output order
    pub output_fields: &'static [&'static str],
}

/// A design-knowledge domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Style,
    Color,
    Chart,
    Landing,
    Product,
    Ux,
    Typography,
    Icons,
    Components,
    Animations,
    React,
    Web,
}

const GUIDELINE_OUTPUT: &[&str] = &[
    "Category",
    "Issue",
    "Platform",
    "Description",
    "Do",
    "Don't",
    "Code Example Good",
    "Code Example Bad",
    "Severity",
];

impl Domain {
    /// All domains in routing order
    pub const ALL: [Domain; 12] = [
        Domain::Style,
        Domain::Color,
        Domain::Chart,
        Domain::Landing,
        Domain::Product,
        Domain::Ux,
        Domain::Typography,
        Domain::Icons,
        Domain::Components,
        Domain::Animations,
        Domain::React,
        Domain::Web,
    ];

    /// Domain used when routing finds no keyword
    pub const DEFAULT: Domain = Domain::Style;

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Style => "style",
            Domain::Color => "color",
            Domain::Chart => "chart",
            Domain::Landing => "landing",
            Domain::Product => "product",
            Domain::Ux => "ux",
            Domain::Typography => "typography",
            Domain::Icons => "icons",
            Domain::Components => "components",
            Domain::Animations => "animations",
            Domain::React => "react",
            Domain::Web => "web",
        }
    }

    pub fn descriptor(&self) -> CorpusDescriptor {
        match self {
            Domain::Style => CorpusDescriptor {
                file: "styles.csv",
                search_fields: &[
                    "Style Category",
                    "Keywords",
                    "Best For",
                    "Type",
                    "AI Prompt Keywords",
                ],
                output_fields: &[
                    "Style Category",
                    "Type",
                    "Keywords",
                    "Primary Colors",
                    "Effects & Animation",
                    "Best For",
                    "Performance",
                    "Accessibility",
                    "Framework Compatibility",
                    "Complexity",
                    "AI Prompt Keywords",
                    "CSS/Technical Keywords",
                    "Implementation Checklist",
                    "Design System Variables",
                ],
            },
            Domain::Color => CorpusDescriptor {
                file: "colors.csv",
                search_fields: &["Product Type", "Notes"],
                output_fields: &[
                    "Product Type",
                    "Primary (Hex)",
                    "Secondary (Hex)",
                    "CTA (Hex)",
                    "Background (Hex)",
                    "Text (Hex)",
                    "Notes",
                ],
            },
            Domain::Chart => CorpusDescriptor {
                file: "charts.csv",
                search_fields: &[
                    "Data Type",
                    "Keywords",
                    "Best Chart Type",
                    "Accessibility Notes",
                ],
                output_fields: &[
                    "Data Type",
                    "Keywords",
                    "Best Chart Type",
                    "Secondary Options",
                    "Color Guidance",
                    "Accessibility Notes",
                    "Library Recommendation",
                    "Interactive Level",
                ],
            },
            Domain::Landing => CorpusDescriptor {
                file: "landing.csv",
                search_fields: &[
                    "Pattern Name",
                    "Keywords",
                    "Conversion Optimization",
                    "Section Order",
                ],
                output_fields: &[
                    "Pattern Name",
                    "Keywords",
                    "Section Order",
                    "Primary CTA Placement",
                    "Color Strategy",
                    "Conversion Optimization",
                ],
            },
            Domain::Product => CorpusDescriptor {
                file: "products.csv",
                search_fields: &[
                    "Product Type",
                    "Keywords",
                    "Primary Style Recommendation",
                    "Key Considerations",
                ],
                output_fields: &[
                    "Product Type",
                    "Keywords",
                    "Primary Style Recommendation",
                    "Secondary Styles",
                    "Landing Page Pattern",
                    "Dashboard Style (if applicable)",
                    "Color Palette Focus",
                ],
            },
            Domain::Ux => CorpusDescriptor {
                file: "ux-guidelines.csv",
                search_fields: &["Category", "Issue", "Description", "Platform"],
                output_fields: GUIDELINE_OUTPUT,
            },
            Domain::Typography => CorpusDescriptor {
                file: "typography.csv",
                search_fields: &[
                    "Font Pairing Name",
                    "Category",
                    "Mood/Style Keywords",
                    "Best For",
                    "Heading Font",
                    "Body Font",
                ],
                output_fields: &[
                    "Font Pairing Name",
                    "Category",
                    "Heading Font",
                    "Body Font",
                    "Mood/Style Keywords",
                    "Best For",
                    "Google Fonts URL",
                    "CSS Import",
                    "Tailwind Config",
                    "Notes",
                ],
            },
            Domain::Icons => CorpusDescriptor {
                file: "icons.csv",
                search_fields: &["Category", "Icon Name", "Keywords", "Best For"],
                output_fields: &[
                    "Category",
                    "Icon Name",
                    "Keywords",
                    "Library",
                    "Import Code",
                    "Usage",
                    "Best For",
                    "Style",
                ],
            },
            Domain::Components => CorpusDescriptor {
                file: "components.csv",
                search_fields: &["Component Name", "Category", "Keywords", "Description"],
                output_fields: &[
                    "Component Name",
                    "Category",
                    "Keywords",
                    "Description",
                    "Variants",
                    "Accessibility",
                    "Animation",
                    "Best Practices",
                    "Anti-Patterns",
                ],
            },
            Domain::Animations => CorpusDescriptor {
                file: "animations.csv",
                search_fields: &["Animation Name", "Category", "Keywords", "Style Match"],
                output_fields: &[
                    "Animation Name",
                    "Category",
                    "Keywords",
                    "CSS Code",
                    "Framer Motion",
                    "GSAP",
                    "Style Match",
                    "Duration",
                    "Easing",
                    "Performance",
                ],
            },
            Domain::React => CorpusDescriptor {
                file: "react-performance.csv",
                search_fields: &["Category", "Issue", "Keywords", "Description"],
                output_fields: GUIDELINE_OUTPUT,
            },
            Domain::Web => CorpusDescriptor {
                file: "web-interface.csv",
                search_fields: &["Category", "Issue", "Keywords", "Description"],
                output_fields: GUIDELINE_OUTPUT,
            },
        }
    }

    /// Comma-separated list of domain keys, for error messages and schemas
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(Domain::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Domain {
    type Err = UxlexError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == key)
            .ok_or_else(|| {
                UxlexError::UnknownDomain(format!("{s}. Available: {}", Self::available()))
            })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A technology stack with its own guideline corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stack {
    HtmlTailwind,
    React,
    Nextjs,
    Astro,
    Vue,
    Nuxtjs,
    NuxtUi,
    Svelte,
    Swiftui,
    ReactNative,
    Flutter,
    Shadcn,
    JetpackCompose,
}

const STACK_SEARCH_FIELDS: &[&str] = &["Category", "Guideline", "Description", "Do", "Don't"];

const STACK_OUTPUT_FIELDS: &[&str] = &[
    "Category",
    "Guideline",
    "Description",
    "Do",
    "Don't",
    "Code Good",
    "Code Bad",
    "Severity",
    "Docs URL",
];

impl Stack {
    pub const ALL: [Stack; 13] = [
        Stack::HtmlTailwind,
        Stack::React,
        Stack::Nextjs,
        Stack::Astro,
        Stack::Vue,
        Stack::Nuxtjs,
        Stack::NuxtUi,
        Stack::Svelte,
        Stack::Swiftui,
        Stack::ReactNative,
        Stack::Flutter,
        Stack::Shadcn,
        Stack::JetpackCompose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::HtmlTailwind => "html-tailwind",
            Stack::React => "react",
            Stack::Nextjs => "nextjs",
            Stack::Astro => "astro",
            Stack::Vue => "vue",
            Stack::Nuxtjs => "nuxtjs",
            Stack::NuxtUi => "nuxt-ui",
            Stack::Svelte => "svelte",
            Stack::Swiftui => "swiftui",
            Stack::ReactNative => "react-native",
            Stack::Flutter => "flutter",
            Stack::Shadcn => "shadcn",
            Stack::JetpackCompose => "jetpack-compose",
        }
    }

    pub fn descriptor(&self) -> CorpusDescriptor {
        let file = match self {
            Stack::HtmlTailwind => "stacks/html-tailwind.csv",
            Stack::React => "stacks/react.csv",
            Stack::Nextjs => "stacks/nextjs.csv",
            Stack::Astro => "stacks/astro.csv",
            Stack::Vue => "stacks/vue.csv",
            Stack::Nuxtjs => "stacks/nuxtjs.csv",
            Stack::NuxtUi => "stacks/nuxt-ui.csv",
            Stack::Svelte => "stacks/svelte.csv",
            Stack::Swiftui => "stacks/swiftui.csv",
            Stack::ReactNative => "stacks/react-native.csv",
            Stack::Flutter => "stacks/flutter.csv",
            Stack::Shadcn => "stacks/shadcn.csv",
            Stack::JetpackCompose => "stacks/jetpack-compose.csv",
        };
        CorpusDescriptor {
            file,
            search_fields: STACK_SEARCH_FIELDS,
            output_fields: STACK_OUTPUT_FIELDS,
        }
    }

    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(Stack::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Stack {
    type Err = UxlexError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == key)
            .ok_or_else(|| {
                UxlexError::UnknownStack(format!("{s}. Available: {}", Self::available()))
            })
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
