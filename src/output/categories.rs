//! File categories for the simple report's grouped listing

/// Relative-path prefixes that put a file in every category.
const SHARED_PREFIXES: &[&str] = &[".env", ".git"];

/// A named bucket of file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub extensions: &'static [&'static str],
}

/// Categories in the order they are rendered.
pub const CATEGORIES: &[Category] = &[
    Category {
        label: "TypeScript",
        extensions: &[".ts"],
    },
    Category {
        label: "JavaScript",
        extensions: &[".js"],
    },
    Category {
        label: "Configuration",
        extensions: &[".json", ".yml", ".yaml", ".env"],
    },
    Category {
        label: "Documentation",
        extensions: &[".md"],
    },
    Category {
        label: "Containerization",
        extensions: &[".dockerfile"],
    },
    Category {
        label: "Other",
        extensions: &[".gitignore", ".dockerignore"],
    },
];

impl Category {
    /// Check if a relative path belongs to this category.
    ///
    /// Paths starting with `.env` or `.git` match every category, so a root
    /// `.env` is listed under all of them.
    ///
    /// Extension matching is case-sensitive: `README.MD` is in the flat
    /// listing but in no category.
    pub fn matches(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext))
            || SHARED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
    }

    /// Paths from `paths` that belong to this category, in input order.
    pub fn select<'a>(&self, paths: &'a [String]) -> Vec<&'a str> {
        paths
            .iter()
            .map(String::as_str)
            .filter(|p| self.matches(p))
            .collect()
    }
}
