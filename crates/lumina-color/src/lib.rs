//! Lumina Color — keyword-driven color grading.

pub mod grade;
pub mod rules;

pub use grade::{apply_color_grade, apply_rule, GradeResult};
pub use rules::{match_prompt, ColorGradeRule, GradeKind, RULES};
