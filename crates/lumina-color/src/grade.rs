//! Applying a grade rule to a raster buffer.

use crate::rules::{match_prompt, ColorGradeRule, GradeKind};
use lumina_core::{to_channel, Execution, RasterBuffer, BYTES_PER_PIXEL};
use tracing::{debug, warn};

/// Output of a prompt-driven grade.
#[derive(Debug, Clone)]
pub struct GradeResult {
    pub image: RasterBuffer,
    /// The rule that was applied; `None` means the prompt matched no
    /// keyword and `image` equals the input. That is not a failure.
    pub applied: Option<GradeKind>,
}

/// Grade `input` with the first rule the prompt matches.
pub fn apply_color_grade(input: &RasterBuffer, prompt: &str, exec: Execution) -> GradeResult {
    match match_prompt(prompt) {
        Some(rule) => {
            debug!(kind = ?rule.kind, prompt, "color grade");
            GradeResult {
                image: apply_rule(input, rule, exec),
                applied: Some(rule.kind),
            }
        }
        None => {
            warn!(prompt, "no grade keyword in prompt; image left unchanged");
            GradeResult {
                image: input.clone(),
                applied: None,
            }
        }
    }
}

/// Apply a single rule's matrix to every pixel; alpha is untouched.
///
/// Each channel is truncated toward zero and clamped to `[0, 255]`.
pub fn apply_rule(input: &RasterBuffer, rule: &ColorGradeRule, exec: Execution) -> RasterBuffer {
    let mut output = input.clone();
    let stride = output.stride();
    let m = rule.matrix;
    exec.for_each_row(output.as_bytes_mut(), stride, |_, row| {
        for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
            let rgb = [px[0] as f64, px[1] as f64, px[2] as f64];
            let out = mat3_mul(&m, rgb);
            px[0] = to_channel(out[0]);
            px[1] = to_channel(out[1]);
            px[2] = to_channel(out[2]);
        }
    });
    output
}

fn mat3_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}
