//! Guess a project's technology stack from its files.

use crate::core::catalog::Stack;
use crate::core::error::{Result, UxlexError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

/// Detect the stack of the project rooted at `project_dir`.
///
/// `package.json` dependencies are checked first, then Flutter, SwiftUI
/// and Jetpack Compose markers. Anything else is `html-tailwind`. An
/// unreadable or malformed `package.json` is skipped.
pub fn detect_tech_stack(project_dir: &Path) -> Result<Stack> {
    if !project_dir.is_dir() {
        return Err(UxlexError::SourceNotFound(format!(
            "Project directory {}",
            project_dir.display()
        )));
    }

    if let Some(stack) = from_package_json(&project_dir.join("package.json")) {
        return Ok(stack);
    }

    if project_dir.join("pubspec.yaml").exists() {
        return Ok(Stack::Flutter);
    }

    if has_file(project_dir, |name| name.ends_with(".swift")) {
        return Ok(Stack::Swiftui);
    }

    if has_file(project_dir, |name| name == "build.gradle.kts") {
        return Ok(Stack::JetpackCompose);
    }

    Ok(Stack::HtmlTailwind)
}

fn from_package_json(path: &Path) -> Option<Stack> {
    let content = std::fs::read_to_string(path).ok()?;
    let pkg: PackageJson = match serde_json::from_str(&content) {
        Ok(pkg) => pkg,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Ignoring malformed package.json");
            return None;
        }
    };

    let mut deps = pkg.dependencies;
    deps.extend(pkg.dev_dependencies);
    let has = |name: &str| deps.contains_key(name);

    if has("next") {
        return Some(Stack::Nextjs);
    }
    if has("nuxt") {
        return Some(if has("@nuxt/ui") {
            Stack::NuxtUi
        } else {
            Stack::Nuxtjs
        });
    }
    if has("astro") {
        return Some(Stack::Astro);
    }
    if has("svelte") || has("@sveltejs/kit") {
        return Some(Stack::Svelte);
    }
    if has("react-native") {
        return Some(Stack::ReactNative);
    }
    if has("react") {
        let shadcn = deps
            .iter()
            .any(|(name, version)| mentions_shadcn(name) || mentions_shadcn(&version.to_string()));
        return Some(if shadcn { Stack::Shadcn } else { Stack::React });
    }
    if has("vue") {
        return Some(Stack::Vue);
    }
    None
}

fn mentions_shadcn(text: &str) -> bool {
    text.contains("shadcn") || text.contains("@radix-ui")
}

fn has_file(root: &Path, matches: impl Fn(&str) -> bool) -> bool {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .any(|entry| entry.file_name().to_str().is_some_and(&matches))
}
