pub const QUALITY_HEADER_RULE: &str =
    "═══════════════════════════════════════════════════════════════";

pub const BLOOM_TAXONOMY_PT: &str = "TAXONOMIA DE BLOOM (USE PARA PROGRESSÃO DE DIFICULDADE):
Nível 1 - LEMBRAR: Reconhecer, listar, identificar, nomear
Nível 2 - COMPREENDER: Explicar, resumir, interpretar, classificar
Nível 3 - APLICAR: Resolver, demonstrar, calcular, usar
Nível 4 - ANALISAR: Comparar, diferenciar, examinar, questionar
Nível 5 - AVALIAR: Julgar, argumentar, justificar, criticar
Nível 6 - CRIAR: Elaborar, projetar, inventar, propor soluções";

pub const QUALITY_STANDARDS: &str = "PADRÕES DE QUALIDADE OBRIGATÓRIOS:
1. CONTEXTUALIZAÇÃO: Relacione o conteúdo com situações reais do cotidiano dos alunos
2. DIVERSIDADE: Inclua exemplos que representem a diversidade cultural brasileira
3. INTERDISCIPLINARIDADE: Quando possível, conecte com outras áreas do conhecimento
4. LINGUAGEM: Adequada à faixa etária, clara, sem ambiguidades
5. ACESSIBILIDADE: Considere diferentes estilos de aprendizagem (visual, auditivo, cinestésico)
6. ENGAJAMENTO: Use elementos que motivem e despertem curiosidade";

pub const TEACHER_INSTRUCTIONS_BLOCK: &str = "INSTRUÇÕES PARA O PROFESSOR (OBRIGATÓRIO):
Inclua um campo \"instrucoes_professor\" com:
- Orientações de aplicação (como usar o material em sala)
- Tempo estimado de execução
- Sugestões de adaptação para alunos com dificuldades
- Possíveis extensões para alunos avançados
- Dicas para avaliação formativa durante a atividade";

pub const MISSING_BNCC_CODES: &str = "Selecione as habilidades adequadas";

pub const QUIZ_QUALITY_RULES: &str = "REGRAS DE QUALIDADE PARA QUESTÕES DE QUIZ:

1. PROGRESSÃO DE DIFICULDADE OBRIGATÓRIA:
   - Primeiras 30% das questões: Nível LEMBRAR/COMPREENDER (fácil)
   - Próximas 40% das questões: Nível APLICAR/ANALISAR (médio)
   - Últimas 30% das questões: Nível AVALIAR/CRIAR (difícil)

2. DESIGN DE ALTERNATIVAS (DISTRATORES PEDAGÓGICOS):
   - A alternativa correta deve ser inequivocamente correta
   - Cada distrator deve representar um ERRO CONCEITUAL COMUM que alunos realmente cometem
   - Evite distratores absurdos ou obviamente errados
   - Evite \"todas as anteriores\" ou \"nenhuma das anteriores\"
   - Alternativas devem ter comprimento similar

3. FEEDBACK EDUCATIVO OBRIGATÓRIO:
   Para cada questão, o campo \"feedback\" DEVE conter:
   - POR QUE a alternativa correta está certa (explicação conceitual)
   - POR QUE cada distrator está errado (identificação do erro conceitual)
   - Uma dica de estudo para aprofundamento

4. CONTEXTUALIZAÇÃO:
   - Use situações reais do cotidiano brasileiro
   - Inclua textos-base, imagens descritas, ou cenários quando relevante
   - Questões devem exigir reflexão, não apenas memorização";

pub const QUIZ_QUALITY_EXAMPLE: &str = r#"EXEMPLO DE QUESTÃO BEM ELABORADA (MODELO):
{
  "id": 1,
  "texto": "Uma fábrica produz 450 peças por hora. Se aumentar sua produção em 20%, quantas peças produzirá em 3 horas?",
  "alternativas": [
    "1.620 peças",
    "1.350 peças",
    "540 peças",
    "1.500 peças"
  ],
  "resposta_correta": 0,
  "dificuldade": "medio",
  "habilidade_bncc": "EF07MA12",
  "nivel_bloom": "Aplicar",
  "feedback": "Correto! Primeiro calculamos o aumento: 450 × 0,20 = 90 peças a mais por hora. Nova produção: 450 + 90 = 540 peças/hora. Em 3 horas: 540 × 3 = 1.620 peças. O erro comum na alternativa B (1.350) é esquecer de aplicar o aumento. O erro na alternativa C (540) é calcular apenas 1 hora. O erro na D (1.500) é calcular 20% incorretamente."
}"#;

pub const EXERCISE_LIST_QUALITY_RULES: &str = "REGRAS DE QUALIDADE PARA EXERCÍCIOS:

1. PROGRESSÃO DE DIFICULDADE OBRIGATÓRIA:
   - Primeiras questões: FÁCIL (recordar/compreender) para ativar conhecimentos prévios
   - Questões intermediárias: MÉDIO (aplicar/analisar) para consolidar aprendizagem
   - Questões finais: DIFÍCIL (avaliar/criar) para desafiar e aprofundar
   Cada questão deve indicar seu nível no campo \"dificuldade\": \"facil\", \"medio\" ou \"dificil\"

2. VARIEDADE DE FORMATOS:
   - Inclua questões de diferentes tipos quando o modelo for \"Misto\":
     * Múltipla escolha com 4 alternativas
     * Verdadeiro/Falso com justificativa
     * Dissertativa com resposta esperada e critérios
   - Mesmo em listas só de múltipla escolha, varie os formatos de enunciado:
     * Situação-problema contextualizada
     * Análise de texto/dado/tabela/gráfico (descrito)
     * Completar lacunas conceituais
     * Associação de colunas

3. GABARITO COMPLETO COM RESOLUÇÃO (OBRIGATÓRIO):
   Cada questão DEVE ter:
   - \"respostaCorreta\": A resposta certa (índice para MC, texto para dissertativa)
   - \"explicacao\": Resolução passo a passo detalhada
   - Para dissertativas: critérios de avaliação e resposta modelo

4. CABEÇALHO DA LISTA:
   Inclua campos:
   - \"cabecalho\": Texto para o topo da lista impressa com nome da escola, disciplina, turma
   - \"instrucoes_aluno\": Instruções claras para o aluno (tempo, material permitido, formato de resposta)";

pub const EXERCISE_LIST_QUALITY_EXAMPLE: &str = r#"EXEMPLO DE QUESTÃO BEM ELABORADA (MODELO):
{
  "id": "questao-1",
  "type": "multipla-escolha",
  "enunciado": "Leia o texto a seguir:\n\"O Rio Amazonas é o maior rio do mundo em volume de água. Sua bacia hidrográfica abrange cerca de 7 milhões de km².\"\nCom base no texto, qual é a principal característica que torna o Rio Amazonas relevante para o equilíbrio ambiental?",
  "alternativas": [
    "Seu volume de água contribui significativamente para o ciclo hidrológico global e a regulação climática",
    "Sua extensão permite a navegação comercial entre todos os países da América do Sul",
    "Sua profundidade torna impossível a construção de pontes, preservando a floresta",
    "Sua temperatura elevada impede a formação de gelo nos polos terrestres"
  ],
  "respostaCorreta": 0,
  "explicacao": "A alternativa A está correta porque o volume de água do Rio Amazonas é fundamental para o ciclo hidrológico, contribuindo com cerca de 20% da água doce que chega aos oceanos. A alternativa B está incorreta pois, embora navegável, o rio não conecta todos os países sul-americanos. A alternativa C apresenta informação falsa. A alternativa D não tem relação causal comprovada.",
  "dificuldade": "medio",
  "habilidade_bncc": "EF06GE11",
  "nivel_bloom": "Analisar",
  "tema": "Bacia Amazônica"
}"#;

pub const LESSON_PLAN_QUALITY_RULES: &str = "REGRAS DE QUALIDADE PARA PLANOS DE AULA:

1. OBJETIVOS DE APRENDIZAGEM (SMART):
   - Específicos: O que exatamente o aluno deve aprender
   - Mensuráveis: Como verificar se aprendeu (verbo de ação observável)
   - Alcançáveis: Realistas para o nível da turma
   - Relevantes: Conectados ao currículo e à vida real
   - Temporais: Realizáveis no tempo disponível
   Use verbos da Taxonomia de Bloom: identificar, classificar, resolver, analisar, avaliar, criar

2. HABILIDADES BNCC REAIS:
   - Cada objetivo deve estar vinculado a pelo menos 1 habilidade BNCC específica com código
   - Use os códigos REAIS (ex: EF07MA17, não \"BNCC aplicável\")

3. METODOLOGIA ATIVA DETALHADA:
   Especifique COMO a metodologia será aplicada:
   - Aprendizagem Baseada em Problemas (PBL): Qual é o problema central?
   - Sala de Aula Invertida: O que o aluno faz antes da aula?
   - Gamificação: Quais elementos de jogo serão usados?
   - Rotação por Estações: Quais são as estações?
   - Peer Instruction: Como organizar os pares?

4. DESENVOLVIMENTO EM ETAPAS DETALHADAS:
   Para cada etapa da aula:
   - Tempo exato (ex: \"10 minutos\")
   - O que o PROFESSOR faz nesse momento
   - O que os ALUNOS fazem nesse momento
   - Recursos utilizados
   - Como avaliar se a etapa funcionou

5. AVALIAÇÃO FORMATIVA INTEGRADA:
   - Não apenas ao final: avalie durante toda a aula
   - Inclua \"exit tickets\" ou verificações rápidas
   - Sugira perguntas-chave para verificar compreensão
   - Indicadores observáveis de aprendizagem

6. DIFERENCIAÇÃO:
   - Adaptações para alunos com dificuldades (andaimes pedagógicos)
   - Extensões para alunos avançados (desafios extras)
   - Estratégias para alunos com necessidades especiais";

pub const FLASH_CARDS_QUALITY_RULES: &str = "REGRAS DE QUALIDADE PARA FLASH CARDS:

1. PROGRESSÃO COGNITIVA:
   - Primeiros 30% dos cards: DEFINIÇÕES e CONCEITOS básicos (Lembrar)
   - Próximos 30% dos cards: EXEMPLOS e APLICAÇÕES práticas (Compreender/Aplicar)
   - Próximos 20% dos cards: COMPARAÇÕES e RELAÇÕES entre conceitos (Analisar)
   - Últimos 20% dos cards: CASOS especiais e EXCEÇÕES (Avaliar)

2. FORMATO RICO PARA CADA CARD:
   FRENTE (pergunta/conceito):
   - Deve ser concisa mas clara
   - Use perguntas diretas, não afirmações para completar
   - Inclua contexto quando necessário

   VERSO (resposta/explicação):
   - Resposta principal em destaque
   - Explicação complementar breve
   - Um exemplo prático quando possível
   - Dica mnemônica quando aplicável

3. ORGANIZAÇÃO POR CATEGORIAS:
   - Agrupe cards por subtópico dentro do tema
   - Cada card deve ter um campo \"category\" com o subtópico
   - Indique o nível de dificuldade: \"Fácil\", \"Médio\", \"Difícil\"

4. TÉCNICAS DE MEMORIZAÇÃO:
   - Use associações visuais (descreva imagens mentais)
   - Inclua analogias com o cotidiano
   - Crie conexões entre cards (referencie outros conceitos do mesmo deck)";

pub const TEACHING_SEQUENCE_QUALITY_RULES: &str = "REGRAS DE QUALIDADE PARA SEQUÊNCIAS DIDÁTICAS:

1. PROGRESSÃO PEDAGÓGICA OBRIGATÓRIA:
   As aulas devem seguir uma progressão lógica:
   - Aula 1-2: SENSIBILIZAÇÃO e DIAGNÓSTICO (levantar conhecimentos prévios)
   - Aulas intermediárias: DESENVOLVIMENTO (explorar, experimentar, construir conhecimento)
   - Penúltima aula: SISTEMATIZAÇÃO (organizar e consolidar aprendizagens)
   - Última aula: AVALIAÇÃO e AUTOAVALIAÇÃO (verificar e refletir sobre a aprendizagem)

2. CADA AULA DEVE CONTER:
   - Objetivo específico mensurável (verbo de ação + conteúdo + contexto)
   - Habilidade BNCC específica trabalhada (código real)
   - Metodologia ativa detalhada (não apenas o nome, mas COMO aplicar)
   - Recursos concretos e acessíveis (considerar realidade de escola pública)
   - Avaliação formativa integrada (como saber se os alunos aprenderam)
   - Tempo estimado realista

3. DIAGNÓSTICOS:
   - Devem ter instrumentos CLAROS e PRÁTICOS
   - Inclua critérios observáveis de avaliação
   - Sugira como registrar e usar os resultados
   - Proponha intervenções baseadas nos possíveis resultados

4. AVALIAÇÕES:
   - Critérios de avaliação ESPECÍFICOS e MENSURÁVEIS
   - Rubrica detalhada com níveis de desempenho
   - Instrumentos variados (não apenas prova escrita)
   - Possibilidade de autoavaliação e avaliação entre pares

5. ARTICULAÇÃO CURRICULAR:
   - Conexões interdisciplinares explícitas
   - Relação com competências gerais da BNCC
   - Contextualização com a realidade local dos alunos";

pub const GENERIC_ACTIVITY_QUALITY_RULES: &str = "PADRÕES OBRIGATÓRIOS PARA QUALQUER ATIVIDADE:

1. OBJETIVOS CLAROS: Defina o que o aluno deve aprender ao final
2. BNCC: Indique pelo menos 1 habilidade BNCC trabalhada
3. CONTEXTUALIZAÇÃO: Relacione com a realidade dos alunos brasileiros
4. PROGRESSÃO: Se houver múltiplas partes, organize em ordem crescente de dificuldade
5. INSTRUÇÕES CLARAS: O professor deve conseguir usar sem explicação adicional
6. AVALIAÇÃO: Inclua critérios para o professor avaliar o desempenho";

pub const BATCH_VARIETY_RULE: &str = "REGRA DE VARIEDADE: Em lotes, NUNCA repita o mesmo formato de atividade consecutivamente.
Alterne entre: Quiz, Exercícios, Dinâmica em Grupo, Pesquisa, Jogo, Produção Textual, Debate, Mapa Mental.";
