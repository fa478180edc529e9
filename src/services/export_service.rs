use chrono::NaiveDate;

use crate::models::domain::Question;

const BLOCK_DIVIDER: &str = "\n\n---\n\n";

fn render_question(question: &Question) -> String {
    let mut block = format!(
        "Questão {}: {}\nEnunciado: {}",
        question.number,
        question.question_type,
        question.statement
    );

    if !question.answer.is_empty() {
        block.push_str(&format!("\nGabarito: {}", question.answer));
    }
    if !question.explanation.is_empty() {
        block.push_str(&format!("\nExplicação: {}", question.explanation));
    }

    block
}

/// Plain-text document with one block per question, in order.
pub fn render_questions_document(questions: &[Question]) -> String {
    questions
        .iter()
        .map(render_question)
        .collect::<Vec<_>>()
        .join(BLOCK_DIVIDER)
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("questoes-geradas-{}.txt", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(number: &str, answer: &str, explanation: &str) -> Question {
        Question {
            number: number.to_string(),
            question_type: "Discursiva".to_string(),
            statement: format!("Enunciado {}", number),
            answer: answer.to_string(),
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn renders_all_fields_in_order() {
        let document = render_questions_document(&[
            question("1", "B", "Porque sim."),
            question("2", "", ""),
        ]);

        assert_eq!(
            document,
            "Questão 1: Discursiva\nEnunciado: Enunciado 1\nGabarito: B\nExplicação: Porque sim.\n\n---\n\nQuestão 2: Discursiva\nEnunciado: Enunciado 2"
        );
    }

    #[test]
    fn empty_list_renders_empty_document() {
        assert!(render_questions_document(&[]).is_empty());
    }

    #[test]
    fn file_name_carries_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "questoes-geradas-2024-03-07.txt");
    }
}
