use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::bncc::BNCC_COMPONENTS,
    models::domain::{BnccComponent, BnccSkill},
};

static GRADE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+)[ºªo°]?\s*(ano|serie|série)?")
        .expect("GRADE_PATTERN is a valid regex pattern")
});

/// Skills listed in the prompt block for a component and grade.
pub const PROMPT_SKILL_LIMIT: usize = 4;

pub fn component(name: &str) -> Option<&'static BnccComponent> {
    BNCC_COMPONENTS.iter().find(|c| c.name == name)
}

pub fn components() -> Vec<&'static str> {
    BNCC_COMPONENTS.iter().map(|c| c.name).collect()
}

pub fn grades_for(component_name: &str) -> Option<Vec<&'static str>> {
    component(component_name).map(|c| c.grades.iter().map(|g| g.grade).collect())
}

/// Maps free-form grade text ("7o ano", "8ª série", "Ensino Médio") onto a table key.
pub fn normalize_grade(grade: &str) -> String {
    if let Some(caps) = GRADE_PATTERN.captures(grade) {
        return format!("{}º Ano", &caps[1]);
    }

    let lowered = grade.to_lowercase();
    if lowered.contains("médio") || lowered.contains("medio") {
        return "9º Ano".to_string();
    }

    grade.to_string()
}

fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn closest_grade<'a>(available: &[&'a str], target: &str) -> Option<&'a str> {
    let Some(target_num) = leading_number(target) else {
        return available.first().copied();
    };

    let mut closest = None;
    let mut min_diff = u32::MAX;

    for grade in available {
        if let Some(grade_num) = leading_number(grade) {
            let diff = grade_num.abs_diff(target_num);
            if diff < min_diff {
                min_diff = diff;
                closest = Some(*grade);
            }
        }
    }

    closest
}

/// Skills for a component and grade, falling back to the nearest grade on the table.
pub fn skills_for(component_name: &str, grade: &str, max: usize) -> Vec<BnccSkill> {
    let Some(comp) = component(component_name) else {
        return Vec::new();
    };

    let normalized = normalize_grade(grade);
    if let Some(entry) = comp.grade(&normalized) {
        return entry.skills.iter().take(max).copied().collect();
    }

    let available: Vec<&str> = comp.grades.iter().map(|g| g.grade).collect();
    match closest_grade(&available, &normalized).and_then(|g| comp.grade(g)) {
        Some(entry) => {
            log::debug!(
                "No BNCC grade '{}' for {}, using {}",
                normalized,
                component_name,
                entry.grade
            );
            entry.skills.iter().take(max).copied().collect()
        }
        None => Vec::new(),
    }
}

pub fn find_by_code(code: &str) -> Option<BnccSkill> {
    let code = code.trim();
    BNCC_COMPONENTS
        .iter()
        .flat_map(|c| c.grades.iter())
        .flat_map(|g| g.skills.iter())
        .find(|s| s.code.eq_ignore_ascii_case(code))
        .copied()
}

pub fn format_for_prompt(component_name: &str, grade: &str) -> String {
    let skills = skills_for(component_name, grade, PROMPT_SKILL_LIMIT);

    if skills.is_empty() {
        return format!(
            "Alinhe com as habilidades da BNCC para {} no {}",
            component_name, grade
        );
    }

    let formatted = skills
        .iter()
        .map(|s| format!("- {}: {} ({})", s.code, s.description, s.knowledge_object))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "HABILIDADES BNCC PRIORITÁRIAS para {} - {}:\n{}",
        component_name, grade, formatted
    )
}
