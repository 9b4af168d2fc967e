//! The fixed prompt-keyword → color matrix table.

use serde::{Deserialize, Serialize};

/// Which grade a prompt selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeKind {
    Night,
    Warm,
    Cold,
    Sepia,
}

/// A keyword rule: any keyword found in the prompt selects `matrix`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorGradeRule {
    pub kind: GradeKind,
    pub keywords: &'static [&'static str],
    /// Row-major RGB matrix; output channel `i` is `dot(matrix[i], rgb)`.
    pub matrix: [[f64; 3]; 3],
}

impl ColorGradeRule {
    /// True if the lower-cased `prompt` contains any of the keywords.
    pub fn matches(&self, prompt: &str) -> bool {
        self.keywords.iter().any(|k| prompt.contains(k))
    }
}

const fn diagonal(r: f64, g: f64, b: f64) -> [[f64; 3]; 3] {
    [[r, 0.0, 0.0], [0.0, g, 0.0], [0.0, 0.0, b]]
}

/// Rules in priority order; the first match wins.
pub const RULES: [ColorGradeRule; 4] = [
    ColorGradeRule {
        kind: GradeKind::Night,
        keywords: &["night", "dark"],
        matrix: diagonal(0.4, 0.4, 0.6),
    },
    ColorGradeRule {
        kind: GradeKind::Warm,
        keywords: &["warm", "sunset"],
        matrix: diagonal(1.2, 1.1, 0.8),
    },
    ColorGradeRule {
        kind: GradeKind::Cold,
        keywords: &["cold", "winter"],
        matrix: diagonal(0.8, 0.9, 1.3),
    },
    ColorGradeRule {
        kind: GradeKind::Sepia,
        keywords: &["sepia", "vintage"],
        matrix: [
            [0.393, 0.769, 0.189],
            [0.349, 0.686, 0.168],
            [0.272, 0.534, 0.131],
        ],
    },
];

/// Find the highest-priority rule whose keyword appears in `prompt`
/// (case-insensitive). `None` means the image is left as is.
pub fn match_prompt(prompt: &str) -> Option<&'static ColorGradeRule> {
    let prompt = prompt.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&prompt))
}
