//! Shared rendering helpers - clean, labeled, no chartjunk

use crate::predict::Diagnosis;

const RULE_HEAVY: char = '═';
const RULE_LIGHT: char = '─';

/// A light horizontal rule of the given width.
#[must_use]
pub fn rule(width: usize) -> String {
    RULE_LIGHT.to_string().repeat(width)
}

fn heavy_rule(width: usize) -> String {
    RULE_HEAVY.to_string().repeat(width)
}

/// A labeled metric row: label, value, delta note.
#[must_use]
pub fn metric_row(label: &str, value: &str, note: &str) -> String {
    format!("  {label:<24} {value:>10}   {note}")
}

/// Application banner shown once at session start.
#[must_use]
pub fn render_header(width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(heavy_rule(width));
    lines.push("  Hospital Digital: Predição e Análise de Obesidade".to_string());
    lines.push(heavy_rule(width));
    lines.join("\n")
}

/// Render one diagnosis result: category and confidence percentage.
#[must_use]
pub fn render_diagnosis(diagnosis: &Diagnosis, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(rule(width));
    lines.push(format!("  Resultado: {}", diagnosis.level));
    lines.push(format!(
        "  Confiança da Predição: {}",
        diagnosis.confidence_percent()
    ));
    lines.push(rule(width));
    lines.join("\n")
}
