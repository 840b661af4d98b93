//! Keyword routing from a raw query to a domain.

use crate::core::catalog::Domain;

/// Keyword literals per domain, in routing order.
const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (Domain::Color, &["color", "palette", "hex", "#", "rgb"]),
    (
        Domain::Chart,
        &[
            "chart",
            "graph",
            "visualization",
            "trend",
            "bar",
            "pie",
            "scatter",
            "heatmap",
            "funnel",
        ],
    ),
    (
        Domain::Landing,
        &[
            "landing",
            "page",
            "cta",
            "conversion",
            "hero",
            "testimonial",
            "pricing",
            "section",
        ],
    ),
    (
        Domain::Product,
        &[
            "saas",
            "ecommerce",
            "e-commerce",
            "fintech",
            "healthcare",
            "gaming",
            "portfolio",
            "crypto",
            "dashboard",
        ],
    ),
    (
        Domain::Style,
        &[
            "style",
            "design",
            "ui",
            "minimalism",
            "glassmorphism",
            "neumorphism",
            "brutalism",
            "dark mode",
            "flat",
            "aurora",
            "prompt",
            "css",
            "implementation",
            "variable",
            "checklist",
            "tailwind",
        ],
    ),
    (
        Domain::Ux,
        &[
            "ux",
            "usability",
            "accessibility",
            "wcag",
            "touch",
            "scroll",
            "animation",
            "keyboard",
            "navigation",
            "mobile",
        ],
    ),
    (
        Domain::Typography,
        &["font", "typography", "heading", "serif", "sans"],
    ),
    (
        Domain::Icons,
        &[
            "icon",
            "icons",
            "lucide",
            "heroicons",
            "symbol",
            "glyph",
            "pictogram",
            "svg icon",
        ],
    ),
    (
        Domain::Components,
        &[
            "component",
            "button",
            "modal",
            "navbar",
            "sidebar",
            "card",
            "table",
            "form",
            "input",
            "dropdown",
            "tooltip",
        ],
    ),
    (
        Domain::Animations,
        &[
            "animation",
            "motion",
            "transition",
            "framer",
            "gsap",
            "keyframe",
            "easing",
        ],
    ),
    (
        Domain::React,
        &[
            "react",
            "next.js",
            "nextjs",
            "suspense",
            "memo",
            "usecallback",
            "useeffect",
            "rerender",
            "bundle",
            "waterfall",
            "barrel",
            "dynamic import",
            "rsc",
            "server component",
        ],
    ),
    (
        Domain::Web,
        &[
            "aria",
            "focus",
            "outline",
            "semantic",
            "virtualize",
            "autocomplete",
            "form",
            "input type",
            "preconnect",
        ],
    ),
];

/// Keyword hits per domain for `query`, in routing order.
pub fn keyword_scores(query: &str) -> Vec<(Domain, usize)> {
    let query = query.to_lowercase();
    DOMAIN_KEYWORDS
        .iter()
        .map(|(domain, keywords)| {
            let hits = keywords.iter().filter(|kw| query.contains(*kw)).count();
            (*domain, hits)
        })
        .collect()
}

/// Pick the domain whose keywords occur most often in `query`.
///
/// A keyword counts once however often it appears. The first domain in
/// routing order wins a tie, and a query with no hits at all goes to
/// [`Domain::DEFAULT`].
pub fn route(query: &str) -> Domain {
    let mut best = (Domain::DEFAULT, 0usize);
    for (domain, hits) in keyword_scores(query) {
        if hits > best.1 {
            best = (domain, hits);
        }
    }
    best.0
}
