use serde::{Deserialize, Serialize};

/// Market-insight article, loaded from a markdown file with an optional
/// YAML front-matter block delimited by `---` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
}

impl Insight {
    /// Parse a markdown document. A missing or unparseable front-matter
    /// block yields a content-only insight titled after its slug.
    #[must_use]
    pub fn from_markdown(slug: &str, text: &str) -> Self {
        let (front, content) = split_front_matter(text);
        let meta = front
            .and_then(|raw| serde_yaml::from_str::<FrontMatter>(raw).ok())
            .unwrap_or_default();
        Self {
            slug: slug.to_string(),
            title: meta
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| slug.to_string()),
            date: meta.date.unwrap_or_default(),
            excerpt: meta.excerpt.unwrap_or_default(),
            content: content.to_string(),
        }
    }
}

/// Split `---\n<yaml>\n---\n<body>` into (yaml, body). Documents that do
/// not open with a front-matter fence are all body.
fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let rest = match text.strip_prefix("---") {
        Some(rest) => rest,
        None => return (None, text),
    };
    let rest = match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
        Some(rest) => rest,
        None => return (None, text),
    };
    for fence in ["\r\n---\r\n", "\r\n---\n", "\n---\r\n", "\n---\n"] {
        if let Some(idx) = rest.find(fence) {
            let front = &rest[..idx];
            let body = &rest[idx + fence.len()..];
            return (Some(front), body);
        }
    }
    // Fence opened but never closed: treat the whole document as body.
    (None, text)
}
