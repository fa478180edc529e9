use crate::models::domain::{QuizQuestion, QuizQuestionOption};

struct FallbackEntry {
    id: &'static str,
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

const OPTION_SUFFIXES: [&str; 4] = ["a", "b", "c", "d"];

static FALLBACK_QUIZ: [FallbackEntry; 5] = [
    FallbackEntry {
        id: "q1",
        text: "Qual é a principal vantagem de utilizar a Ponto.School para seus estudos?",
        options: [
            "Apenas materiais didáticos",
            "Personalização inteligente com IA",
            "Apenas vídeo-aulas",
            "Só funciona para ensino fundamental",
        ],
        correct: 1,
        explanation: "A Ponto.School oferece personalização inteligente com IA para adaptar o conteúdo às suas necessidades de aprendizado.",
    },
    FallbackEntry {
        id: "q2",
        text: "O que é o Epictus IA na plataforma Ponto.School?",
        options: [
            "Um jogo educativo",
            "Um assistente de inteligência artificial",
            "Um calendário de estudos",
            "Uma calculadora avançada",
        ],
        correct: 1,
        explanation: "O Epictus IA é um assistente de inteligência artificial que ajuda na personalização do aprendizado.",
    },
    FallbackEntry {
        id: "q3",
        text: "Qual recurso permite estudar com outros alunos na Ponto.School?",
        options: ["Modo Solo", "Calendário", "Grupos de Estudo", "Agenda"],
        correct: 2,
        explanation: "Os Grupos de Estudo permitem colaboração e aprendizado conjunto com outros estudantes.",
    },
    FallbackEntry {
        id: "q4",
        text: "Como funciona o sistema de pontos na plataforma?",
        options: [
            "São usados apenas para jogos",
            "Podem ser trocados por recompensas",
            "Não existem pontos na plataforma",
            "São apenas decorativos",
        ],
        correct: 1,
        explanation: "Os pontos na plataforma são acumulados ao completar atividades e podem ser trocados por recompensas.",
    },
    FallbackEntry {
        id: "q5",
        text: "O que é o Modo Estudo no quiz da Ponto.School?",
        options: [
            "Um timer para limitar o tempo",
            "Um modo sem perguntas",
            "Mostra explicações após cada resposta",
            "Não permite consultar material",
        ],
        correct: 2,
        explanation: "O Modo Estudo mostra explicações detalhadas após cada resposta para melhorar o aprendizado.",
    },
];

/// The fixed quiz served when generation fails or yields too few valid questions.
pub fn fallback_quiz_questions() -> Vec<QuizQuestion> {
    FALLBACK_QUIZ
        .iter()
        .map(|entry| QuizQuestion {
            id: entry.id.to_string(),
            text: entry.text.to_string(),
            options: entry
                .options
                .iter()
                .zip(OPTION_SUFFIXES)
                .enumerate()
                .map(|(index, (text, suffix))| QuizQuestionOption {
                    id: format!("{}-{}", entry.id, suffix),
                    text: text.to_string(),
                    is_correct: index == entry.correct,
                })
                .collect(),
            explanation: entry.explanation.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_five_questions_with_one_correct_option() {
        let questions = fallback_quiz_questions();

        assert_eq!(questions.len(), 5);
        for question in &questions {
            assert!(!question.id.is_empty());
            assert!(!question.text.is_empty());
            assert_eq!(question.options.len(), 4);
            assert_eq!(question.correct_options().count(), 1);
        }
    }

    #[test]
    fn fallback_option_ids_are_prefixed_by_question() {
        let questions = fallback_quiz_questions();
        let ids: Vec<&str> = questions[2].options.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(ids, vec!["q3-a", "q3-b", "q3-c", "q3-d"]);
        assert_eq!(
            questions[2].correct_options().next().map(|o| o.text.as_str()),
            Some("Grupos de Estudo")
        );
    }
}
