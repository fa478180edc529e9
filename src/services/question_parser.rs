use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{question::UNSPECIFIED_TYPE, Question};

// "Questão 3:", "3.", "3)" at the start of the text or of a line
static QUESTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:Questão\s*)?([0-9]+)[.:)]")
        .expect("QUESTION_LABEL is a valid regex pattern")
});

static TYPE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^(?:tipo de questão|tipo):\s*([^\n]*)\n?")
        .expect("TYPE_LINE is a valid regex pattern")
});

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:gabarito|resposta):\s*([^\n]*)\n?")
        .expect("ANSWER_LINE is a valid regex pattern")
});

// Greedy to the end of the block.
static EXPLANATION_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:explicação|justificativa):\s*(.*)")
        .expect("EXPLANATION_TAIL is a valid regex pattern")
});

/// Splits a free-text reply into numbered questions.
///
/// Never returns an empty list: text without any recognizable numbering
/// becomes a single question holding the whole (trimmed) text.
pub fn process_questions(text: &str) -> Vec<Question> {
    let labels: Vec<(usize, usize, &str)> = QUESTION_LABEL
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?;
            Some((whole.start(), whole.end(), number.as_str()))
        })
        .collect();

    if labels.is_empty() {
        return vec![Question::whole_text(text)];
    }

    labels
        .iter()
        .enumerate()
        .map(|(index, &(_, body_start, number))| {
            let body_end = labels
                .get(index + 1)
                .map(|&(next_start, _, _)| next_start)
                .unwrap_or(text.len());
            parse_block(number, &text[body_start..body_end])
        })
        .collect()
}

fn captured(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn parse_block(number: &str, block: &str) -> Question {
    let block = block.trim();

    let question_type = captured(&TYPE_LINE, block)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNSPECIFIED_TYPE.to_string());
    let content = TYPE_LINE.replace(block, "");
    let content = content.trim();

    let answer = captured(&ANSWER_LINE, content).unwrap_or_default();
    let explanation = captured(&EXPLANATION_TAIL, content).unwrap_or_default();

    let without_answer = ANSWER_LINE.replace(content, "");
    let statement = EXPLANATION_TAIL
        .replace(&without_answer, "")
        .trim()
        .to_string();

    Question {
        number: number.to_string(),
        question_type,
        statement,
        answer,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_question_scenario_is_split_and_stripped() {
        let text = "Questão 1: Quanto é 2+2?\nTipo: Matemática\nGabarito: 4\nExplicação: Soma simples.\nQuestão 2: Capital da França?\nGabarito: Paris";

        let questions = process_questions(text);

        assert_eq!(
            questions,
            vec![
                Question {
                    number: "1".to_string(),
                    question_type: "Matemática".to_string(),
                    statement: "Quanto é 2+2?".to_string(),
                    answer: "4".to_string(),
                    explanation: "Soma simples.".to_string(),
                },
                Question {
                    number: "2".to_string(),
                    question_type: UNSPECIFIED_TYPE.to_string(),
                    statement: "Capital da França?".to_string(),
                    answer: "Paris".to_string(),
                    explanation: String::new(),
                },
            ]
        );
    }

    #[test]
    fn label_type_and_answer_pass_through() {
        let questions = process_questions("Questão 7: X\nTipo: Y\nGabarito: Z");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, "7");
        assert_eq!(questions[0].question_type, "Y");
        assert_eq!(questions[0].answer, "Z");
        assert_eq!(questions[0].statement, "X");
    }

    #[test]
    fn text_without_numbering_becomes_one_question() {
        let text = "  A fotossíntese converte luz em energia química.\nEla ocorre nos cloroplastos.  ";

        let questions = process_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, "1");
        assert_eq!(questions[0].question_type, UNSPECIFIED_TYPE);
        assert_eq!(questions[0].statement, text.trim());
        assert!(questions[0].answer.is_empty());
        assert!(questions[0].explanation.is_empty());
    }

    #[test]
    fn empty_and_blank_text_still_yield_a_question() {
        assert_eq!(process_questions("").len(), 1);
        assert_eq!(process_questions(" \n\t ").len(), 1);
    }

    #[test]
    fn missing_fields_get_sentinels() {
        let questions = process_questions("1. Defina ecossistema.");

        assert_eq!(questions[0].question_type, UNSPECIFIED_TYPE);
        assert_eq!(questions[0].answer, "");
        assert_eq!(questions[0].explanation, "");
        assert_eq!(questions[0].statement, "Defina ecossistema.");
    }

    #[test]
    fn k_blocks_yield_k_questions_in_order() {
        let k = 12;
        let text: String = (1..=k)
            .map(|i| format!("Questão {}: Enunciado número {}\nGabarito: R{}\n", i, i, i))
            .collect();

        let questions = process_questions(&text);

        assert_eq!(questions.len(), k);
        for (i, question) in questions.iter().enumerate() {
            assert_eq!(question.number, (i + 1).to_string());
            assert_eq!(question.answer, format!("R{}", i + 1));
        }
    }

    #[test]
    fn mixed_label_styles_are_recognized() {
        let text = "1. Primeira\n2) Segunda\nQuestão 3: Terceira\nQuestão4. Quarta";

        let numbers: Vec<String> = process_questions(text)
            .into_iter()
            .map(|q| q.number)
            .collect();

        assert_eq!(numbers, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn labels_are_echoed_verbatim_not_renumbered() {
        let text = "7. Sétima\n3. Terceira\n3. Terceira de novo";

        let numbers: Vec<String> = process_questions(text)
            .into_iter()
            .map(|q| q.number)
            .collect();

        assert_eq!(numbers, vec!["7", "3", "3"]);
    }

    #[test]
    fn field_labels_are_case_insensitive_with_alternate_names() {
        let text = "Questão 1: Explique a erosão.\nTIPO DE QUESTÃO: discursiva\nRESPOSTA: Desgaste do solo\nJUSTIFICATIVA: Agentes naturais\nremovem sedimentos.";

        let questions = process_questions(text);

        assert_eq!(questions[0].question_type, "discursiva");
        assert_eq!(questions[0].answer, "Desgaste do solo");
        assert_eq!(
            questions[0].explanation,
            "Agentes naturais\nremovem sedimentos."
        );
        assert_eq!(questions[0].statement, "Explique a erosão.");
    }

    #[test]
    fn explanation_swallows_everything_after_it() {
        let text = "1. Quanto é 3x3?\nExplicação: Multiplicação.\nGabarito: 9";

        let question = &process_questions(text)[0];

        assert_eq!(question.answer, "9");
        assert_eq!(question.explanation, "Multiplicação.\nGabarito: 9");
        assert_eq!(question.statement, "Quanto é 3x3?");
    }

    #[test]
    fn alternatives_stay_in_the_statement() {
        let text = "Questão 1: Qual é a capital do Brasil?\na) São Paulo\nb) Brasília\nc) Rio de Janeiro\nGabarito: b";

        let question = &process_questions(text)[0];

        assert_eq!(
            question.statement,
            "Qual é a capital do Brasil?\na) São Paulo\nb) Brasília\nc) Rio de Janeiro"
        );
        assert_eq!(question.answer, "b");
    }

    #[test]
    fn leading_prose_before_first_label_is_dropped() {
        let text = "Aqui estão as questões:\n1. Primeira\n2. Segunda";

        let questions = process_questions(text);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].statement, "Primeira");
    }

    #[test]
    fn rendered_labels_are_re_extracted() {
        // A statement that embeds "Gabarito:" is not stable across a render/parse round trip
        let text = "1. Complete: Gabarito: ____ é o que se espera";

        let question = &process_questions(text)[0];

        assert_eq!(question.answer, "____ é o que se espera");
        assert_eq!(question.statement, "Complete:");
    }

    #[test]
    fn many_blocks_are_processed_in_one_pass() {
        let text: String = (1..=2000).map(|i| format!("{}. Item\n", i)).collect();
        assert_eq!(process_questions(&text).len(), 2000);
    }
}
