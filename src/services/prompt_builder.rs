use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{
    constants::{prompts::*, quality_prompts::*},
    models::domain::{QuestionsConfig, QuizQuestion},
    services::bncc_service,
};

/// Characters of topic text embedded in a prompt.
pub const TOPIC_EXCERPT_CHARS: usize = 500;

pub const QUIZ_QUESTION_COUNT: usize = 5;

static QUIZ_SCHEMA: Lazy<String> = Lazy::new(|| {
    let schema = schemars::schema_for!(Vec<QuizQuestion>);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
});

pub fn topic_excerpt(topic: &str) -> String {
    let topic = topic.trim();
    let mut chars = topic.chars();
    let excerpt: String = chars.by_ref().take(TOPIC_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", excerpt)
    } else {
        excerpt
    }
}

fn curricular_alignment(code: Option<&str>) -> String {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return String::new();
    };

    match bncc_service::find_by_code(code) {
        Some(skill) => format!(
            " Se possível, alinhe com a competência BNCC selecionada: {} ({}).",
            skill.code, skill.description
        ),
        None => format!(
            " Se possível, alinhe com a competência BNCC selecionada: {}.",
            code
        ),
    }
}

pub fn build_exam_prompt(topic: &str, config: &QuestionsConfig) -> String {
    format!(
        "Com base no conteúdo a seguir:\n\"{}\"\n\nGere {} questões diretamente relacionadas ao conteúdo explicado. Sendo:\n{} questões de múltipla escolha, {} questões discursivas, {} questões de verdadeiro ou falso.{}\n\n{}\n\n{}",
        topic_excerpt(topic),
        config.total_questions,
        config.multiple_choice,
        config.discursive,
        config.true_false,
        curricular_alignment(config.curricular_code.as_deref()),
        EXAM_QUESTION_FIELDS,
        EXAM_MANDATORY_RULES,
    )
}

pub fn build_quiz_prompt(topic: &str, use_smart_difficulty: bool) -> String {
    let difficulty_rule = if use_smart_difficulty {
        QUIZ_SMART_DIFFICULTY_RULE
    } else {
        QUIZ_FIXED_DIFFICULTY_RULE
    };

    format!(
        "Gere um quiz com {count} perguntas de múltipla escolha baseadas no seguinte conteúdo:\n\"{excerpt}\"\n\nRegras:\n- As perguntas devem estar diretamente relacionadas ao conteúdo fornecido\n{difficulty_rule}\n- Cada pergunta deve ter 4 alternativas, com apenas uma correta\n- Forneça uma explicação concisa para cada resposta\n\nResponda APENAS com um array JSON com as {count} perguntas no formato a seguir, sem qualquer texto, explicação adicional ou bloco de código:\n{example}\n\nO array deve obedecer a este JSON Schema:\n{schema}",
        count = QUIZ_QUESTION_COUNT,
        excerpt = topic_excerpt(topic),
        difficulty_rule = difficulty_rule,
        example = QUIZ_JSON_EXAMPLE,
        schema = QUIZ_SCHEMA.as_str(),
    )
}

/// Curricular context for the quality guidelines.
#[derive(Debug, Clone, Deserialize)]
pub struct QualityContext {
    pub topic: String,
    pub subject: String,
    pub grade: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Quiz,
    ExerciseList,
    LessonPlan,
    FlashCards,
    TeachingSequence,
    Generic,
}

impl ActivityType {
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "quiz-interativo" => ActivityType::Quiz,
            "lista-exercicios" => ActivityType::ExerciseList,
            "plano-aula" => ActivityType::LessonPlan,
            "flash-cards" => ActivityType::FlashCards,
            "sequencia-didatica" => ActivityType::TeachingSequence,
            _ => ActivityType::Generic,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ActivityType::Quiz => "DIRETRIZES DE QUALIDADE PEDAGÓGICA PARA QUIZ",
            ActivityType::ExerciseList => {
                "DIRETRIZES DE QUALIDADE PEDAGÓGICA PARA LISTA DE EXERCÍCIOS"
            }
            ActivityType::LessonPlan => "DIRETRIZES DE QUALIDADE PEDAGÓGICA PARA PLANO DE AULA",
            ActivityType::FlashCards => "DIRETRIZES DE QUALIDADE PEDAGÓGICA PARA FLASH CARDS",
            ActivityType::TeachingSequence => {
                "DIRETRIZES DE QUALIDADE PEDAGÓGICA PARA SEQUÊNCIA DIDÁTICA"
            }
            ActivityType::Generic => "DIRETRIZES DE QUALIDADE PEDAGÓGICA (ATIVIDADE GERAL)",
        }
    }
}

fn bncc_codes_section(ctx: &QualityContext, numbering: u8) -> String {
    let codes = bncc_service::skills_for(&ctx.subject, &ctx.grade, 3)
        .iter()
        .map(|s| s.code)
        .collect::<Vec<_>>()
        .join(", ");
    let codes = if codes.is_empty() {
        MISSING_BNCC_CODES.to_string()
    } else {
        codes
    };

    format!(
        "{}. HABILIDADES BNCC:\n   Cada questão deve indicar qual habilidade BNCC trabalha:\n   Códigos disponíveis: {}",
        numbering, codes
    )
}

/// Pedagogical quality guidelines appended to an activity-generation prompt.
pub fn quality_enhancement_for(activity_type: &str, ctx: &QualityContext) -> String {
    let activity = ActivityType::from_slug(activity_type);
    let header = format!(
        "{}\n{}\nTEMA: {}",
        activity.title(),
        QUALITY_HEADER_RULE,
        ctx.topic.trim()
    );
    let bncc_block = bncc_service::format_for_prompt(&ctx.subject, &ctx.grade);

    let sections: Vec<String> = match activity {
        ActivityType::Quiz => vec![
            header,
            bncc_block,
            BLOOM_TAXONOMY_PT.to_string(),
            QUIZ_QUALITY_RULES.to_string(),
            bncc_codes_section(ctx, 5),
            QUIZ_QUALITY_EXAMPLE.to_string(),
            TEACHER_INSTRUCTIONS_BLOCK.to_string(),
            QUALITY_STANDARDS.to_string(),
        ],
        ActivityType::ExerciseList => vec![
            header,
            bncc_block,
            BLOOM_TAXONOMY_PT.to_string(),
            EXERCISE_LIST_QUALITY_RULES.to_string(),
            bncc_codes_section(ctx, 5),
            EXERCISE_LIST_QUALITY_EXAMPLE.to_string(),
            TEACHER_INSTRUCTIONS_BLOCK.to_string(),
            QUALITY_STANDARDS.to_string(),
        ],
        ActivityType::LessonPlan => vec![
            header,
            bncc_block,
            LESSON_PLAN_QUALITY_RULES.to_string(),
            QUALITY_STANDARDS.to_string(),
        ],
        ActivityType::FlashCards => vec![
            header,
            bncc_block,
            FLASH_CARDS_QUALITY_RULES.to_string(),
            QUALITY_STANDARDS.to_string(),
        ],
        ActivityType::TeachingSequence => vec![
            header,
            bncc_block,
            TEACHING_SEQUENCE_QUALITY_RULES.to_string(),
            QUALITY_STANDARDS.to_string(),
        ],
        ActivityType::Generic => vec![
            header,
            bncc_block,
            BLOOM_TAXONOMY_PT.to_string(),
            GENERIC_ACTIVITY_QUALITY_RULES.to_string(),
            QUALITY_STANDARDS.to_string(),
        ],
    };

    sections.join("\n\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionPhase {
    pub name: &'static str,
    pub objective: &'static str,
    pub bloom_level: &'static str,
    pub suggested_types: &'static str,
}

pub fn progression_phase(index: usize, total: usize) -> ProgressionPhase {
    let position = index as f64 / total.saturating_sub(1).max(1) as f64;

    if position <= 0.2 {
        ProgressionPhase {
            name: "ATIVAÇÃO (Aquecimento)",
            objective: "Ativar conhecimentos prévios, despertar curiosidade, diagnosticar nível da turma",
            bloom_level: "Lembrar / Compreender",
            suggested_types: "Quiz diagnóstico, brainstorm guiado, mapa mental inicial, roda de conversa",
        }
    } else if position <= 0.5 {
        ProgressionPhase {
            name: "EXPLORAÇÃO (Construção)",
            objective: "Apresentar novo conteúdo, explorar conceitos, construir entendimento",
            bloom_level: "Compreender / Aplicar",
            suggested_types: "Aula dialogada com exercícios, experimento, estudo de caso, rotação por estações",
        }
    } else if position <= 0.75 {
        ProgressionPhase {
            name: "APROFUNDAMENTO (Prática)",
            objective: "Aplicar conhecimentos em situações novas, resolver problemas, conectar com outras áreas",
            bloom_level: "Aplicar / Analisar",
            suggested_types: "Lista de exercícios progressiva, projeto em grupo, pesquisa dirigida, debate",
        }
    } else if position < 1.0 {
        ProgressionPhase {
            name: "CONSOLIDAÇÃO (Desafio)",
            objective: "Desafiar com problemas complexos, promover reflexão crítica, sintetizar aprendizagens",
            bloom_level: "Analisar / Avaliar",
            suggested_types: "Desafio em grupo, produção textual, apresentação, jogo pedagógico avançado",
        }
    } else {
        ProgressionPhase {
            name: "AVALIAÇÃO (Verificação)",
            objective: "Verificar aprendizagem, celebrar conquistas, planejar próximos passos",
            bloom_level: "Avaliar / Criar",
            suggested_types: "Avaliação formativa, autoavaliação, prova, portfólio, apresentação final",
        }
    }
}

/// Guidance for the `index`-th activity (0-based) of a batch; empty for single activities.
pub fn batch_progression_prompt(index: usize, total: usize, previous_types: &[String]) -> String {
    if total <= 1 {
        return String::new();
    }

    let phase = progression_phase(index, total);
    let avoid_types = if previous_types.is_empty() {
        String::new()
    } else {
        format!(
            "\nTIPOS JÁ USADOS (EVITE REPETIR FORMATO): {}",
            previous_types.join(", ")
        )
    };

    format!(
        "PROGRESSÃO EM LOTE (Atividade {} de {}):\n{}\nFASE PEDAGÓGICA DESTA ATIVIDADE: {}\nOBJETIVO DESTA FASE: {}\nNÍVEL DE BLOOM PREDOMINANTE: {}\nTIPO DE ATIVIDADE SUGERIDO: {}{}\n\n{}",
        index + 1,
        total,
        QUALITY_HEADER_RULE,
        phase.name,
        phase.objective,
        phase.bloom_level,
        phase.suggested_types,
        avoid_types,
        BATCH_VARIETY_RULE,
    )
}
