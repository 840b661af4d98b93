// Test fixtures for integration testing

use std::path::Path;
use tempfile::TempDir;

pub const STYLE_HEADERS: &[&str] = &[
    "No",
    "Style Category",
    "Type",
    "Keywords",
    "Primary Colors",
    "Best For",
    "Complexity",
    "AI Prompt Keywords",
];

pub const STYLE_ROWS: &[&[&str]] = &[
    &[
        "1",
        "Glassmorphism",
        "General",
        "frosted glass blur translucent layers",
        "#FFFFFF33, #1E293B",
        "dashboards overlays modern saas",
        "Medium",
        "frosted panels with backdrop blur",
    ],
    &[
        "2",
        "Neumorphism",
        "General",
        "soft embossed extruded shadows",
        "#E0E5EC",
        "tactile controls settings",
        "Medium",
        "soft extruded surfaces",
    ],
    &[
        "3",
        "Minimalism",
        "General",
        "whitespace simple restraint",
        "#000000, #FFFFFF",
        "portfolio editorial",
        "Low",
        "generous whitespace, restrained type",
    ],
    &[
        "4",
        "Brutalism",
        "General",
        "raw harsh unpolished",
        "#FF0000, #000000",
        "art collectives zines",
        "Low",
        "raw grids, default fonts",
    ],
];

pub const COLOR_HEADERS: &[&str] = &[
    "No",
    "Product Type",
    "Primary (Hex)",
    "Secondary (Hex)",
    "CTA (Hex)",
    "Background (Hex)",
    "Text (Hex)",
    "Notes",
];

pub const COLOR_ROWS: &[&[&str]] = &[
    &[
        "1",
        "SaaS",
        "#2563EB",
        "#3B82F6",
        "#F97316",
        "#F8FAFC",
        "#1E293B",
        "Trust blue with warm accents",
    ],
    &[
        "2",
        "Fintech",
        "#0F172A",
        "#1E3A8A",
        "#CA8A04",
        "#F8FAFC",
        "#020617",
        "Navy trust palette with gold",
    ],
    &[
        "3",
        "Healthcare",
        "#0891B2",
        "#22D3EE",
        "#059669",
        "#ECFEFF",
        "#164E63",
        "Calm teal for medical services",
    ],
];

pub const PRODUCT_HEADERS: &[&str] = &[
    "No",
    "Product Type",
    "Keywords",
    "Primary Style Recommendation",
    "Secondary Styles",
    "Landing Page Pattern",
    "Dashboard Style (if applicable)",
    "Color Palette Focus",
    "Key Considerations",
];

pub const PRODUCT_ROWS: &[&[&str]] = &[
    &[
        "1",
        "SaaS (General)",
        "saas software subscription",
        "Glassmorphism + Flat Design",
        "Soft UI",
        "Hero + Features + CTA",
        "Data-Dense Dashboard",
        "Trust blue + accent",
        "Onboarding and trial conversion",
    ],
    &[
        "2",
        "E-commerce",
        "ecommerce shop retail",
        "Vibrant & Block-based",
        "Aurora UI",
        "Feature-Rich Showcase",
        "Sales analytics",
        "Brand primary + success green",
        "Checkout friction and product imagery",
    ],
];

pub const STACK_HEADERS: &[&str] = &[
    "No",
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

pub const REACT_ROWS: &[&[&str]] = &[
    &[
        "1",
        "State",
        "Use functional updates",
        "Avoid stale closures when the next state depends on the previous one",
        "setCount(c => c + 1)",
        "setCount(count + 1)",
        "setCount(c => c + 1)",
        "setCount(count + 1)",
        "High",
        "https://react.dev/reference/react/useState",
    ],
    &[
        "2",
        "Performance",
        "Memoize expensive computations",
        "Wrap heavy derived values in useMemo",
        "useMemo for expensive work",
        "Recompute on every render",
        "const v = useMemo(() => heavy(a), [a])",
        "const v = heavy(a)",
        "Medium",
        "https://react.dev/reference/react/useMemo",
    ],
    &[
        "3",
        "Rendering",
        "Stable list keys",
        "Give list items stable unique keys",
        "key={item.id}",
        "key={index}",
        "<li key={item.id}>",
        "<li key={index}>",
        "High",
        "https://react.dev/learn/rendering-lists",
    ],
];

/// On-disk corpus directory for integration tests
#[allow(dead_code)] // Used across test binaries
pub struct TestCorpus {
    pub dir: TempDir,
}

#[allow(dead_code)] // Used across test binaries
impl TestCorpus {
    /// Empty data directory
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Data directory with styles, colors, products and the React stack
    pub fn design() -> Self {
        let corpus = Self::empty();
        corpus.write("styles.csv", STYLE_HEADERS, STYLE_ROWS);
        corpus.write("colors.csv", COLOR_HEADERS, COLOR_ROWS);
        corpus.write("products.csv", PRODUCT_HEADERS, PRODUCT_ROWS);
        corpus.write("stacks/react.csv", STACK_HEADERS, REACT_ROWS);
        corpus
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write (or overwrite) a corpus file relative to the data directory
    pub fn write(&self, file: &str, headers: &[&str], rows: &[&[&str]]) {
        let path = self.dir.path().join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }

        let mut writer = csv::Writer::from_path(&path).expect("Failed to create CSV file");
        writer.write_record(headers).expect("Failed to write header");
        for row in rows {
            writer.write_record(*row).expect("Failed to write row");
        }
        writer.flush().expect("Failed to flush CSV file");
    }

    /// Push the file's mtime forward so the cache sees a change even on
    /// filesystems with coarse timestamps
    pub fn touch_later(&self, file: &str, secs: u64) {
        let path = self.dir.path().join(file);
        let f = std::fs::OpenOptions::new()
            .write(true)
            .open(&path)
            .expect("Failed to open corpus file");
        let modified = f
            .metadata()
            .and_then(|m| m.modified())
            .expect("Failed to read mtime");
        f.set_modified(modified + std::time::Duration::from_secs(secs))
            .expect("Failed to set mtime");
    }
}

/// Project directory for stack detection tests
#[allow(dead_code)] // Used across test binaries
pub fn create_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
    temp
}
