pub const SYSTEM_PERSONA_PROMPT: &str = "Você é o Epictus IA, o assistente inteligente da Ponto.School, uma plataforma educacional.

INSTRUÇÕES PARA VOCÊ:
1. Responda sempre em português do Brasil
2. Seja preciso, didático e fiel ao conteúdo fornecido
3. Siga rigorosamente o formato de saída pedido em cada mensagem";

pub const EXAM_QUESTION_FIELDS: &str = "IMPORTANTE:
1. Cada questão DEVE abordar especificamente os conceitos, temas e exemplos mencionados no conteúdo
2. Numere cada questão no formato \"Questão N:\" no início da linha
3. Para cada questão, forneça:
  - Um título curto e descritivo sobre o tema principal da questão
  - O tipo de questão em uma linha \"Tipo:\" (múltipla escolha, discursiva ou verdadeiro/falso)
  - Enunciado completo
  - Alternativas (para múltipla escolha) ou afirmações (para V/F)
  - Gabarito com a resposta correta em uma linha \"Gabarito:\"
  - Uma explicação detalhada da resposta em uma linha \"Explicação:\", sempre como último campo da questão";

pub const EXAM_MANDATORY_RULES: &str = "REGRAS OBRIGATÓRIAS:
- NÃO INCLUA SAUDAÇÕES AO USUÁRIO (como \"Olá\", \"Oi\", \"Bom dia\", etc)
- NÃO INCLUA NENHUM TIPO DE LINK em nenhuma questão
- NÃO FAÇA REFERÊNCIAS A NENHUMA PLATAFORMA ou recurso externo
- NÃO INCLUA LEMBRETES DA PLATAFORMA - APENAS AS QUESTÕES
- NÃO FAÇA REFERÊNCIA A NENHUMA SEÇÃO OU PÁGINA DA PLATAFORMA
- APRESENTE APENAS AS QUESTÕES sem textos introdutórios ou conclusivos
- NÃO USE EMOJIS ou elementos decorativos
- NÃO USE BLOCOS DE CÓDIGO nem formatação markdown

Use exatamente os termos e conceitos explicados no conteúdo. Não invente tópicos não abordados.";

pub const QUIZ_JSON_EXAMPLE: &str = r#"[
  {
    "id": "q1",
    "text": "Enunciado da pergunta",
    "options": [
      { "id": "q1-a", "text": "Alternativa A", "isCorrect": false },
      { "id": "q1-b", "text": "Alternativa B", "isCorrect": true },
      { "id": "q1-c", "text": "Alternativa C", "isCorrect": false },
      { "id": "q1-d", "text": "Alternativa D", "isCorrect": false }
    ],
    "explanation": "Explicação da resposta correta"
  }
]"#;

pub const QUIZ_SMART_DIFFICULTY_RULE: &str =
    "- Misture níveis de dificuldade (fácil, médio e difícil)";
pub const QUIZ_FIXED_DIFFICULTY_RULE: &str = "- Mantenha um nível médio de dificuldade";
