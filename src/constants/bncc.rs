use crate::models::domain::{BnccComponent, BnccGrade, BnccSkill};

// Base Nacional Comum Curricular (MEC, 2018), a curated subset per component and grade.
pub static BNCC_COMPONENTS: &[BnccComponent] = &[
    BnccComponent {
        name: "Matemática",
        grades: &[
            BnccGrade {
                grade: "1º Ano",
                skills: &[
                    BnccSkill { code: "EF01MA01", description: "Utilizar números naturais como indicador de quantidade ou de ordem em diferentes situações cotidianas", knowledge_object: "Contagem e comparação de quantidades" },
                    BnccSkill { code: "EF01MA02", description: "Contar de maneira exata ou aproximada, utilizando diferentes estratégias como o pareamento", knowledge_object: "Contagem e comparação de quantidades" },
                    BnccSkill { code: "EF01MA05", description: "Comparar números naturais de até duas ordens em situações cotidianas", knowledge_object: "Contagem e comparação de quantidades" },
                ],
            },
            BnccGrade {
                grade: "2º Ano",
                skills: &[
                    BnccSkill { code: "EF02MA01", description: "Comparar e ordenar números naturais (até a ordem de centenas) pela compreensão de características do sistema de numeração decimal", knowledge_object: "Leitura, escrita, comparação e ordenação de números" },
                    BnccSkill { code: "EF02MA05", description: "Construir fatos básicos da adição e subtração e utilizá-los no cálculo mental ou escrito", knowledge_object: "Construção de fatos fundamentais da adição e subtração" },
                    BnccSkill { code: "EF02MA06", description: "Resolver e elaborar problemas de adição e de subtração, envolvendo números de até três ordens", knowledge_object: "Problemas envolvendo diferentes significados da adição e da subtração" },
                ],
            },
            BnccGrade {
                grade: "3º Ano",
                skills: &[
                    BnccSkill { code: "EF03MA01", description: "Ler, escrever e comparar números naturais de até a ordem de unidade de milhar", knowledge_object: "Leitura, escrita, comparação e ordenação de números naturais" },
                    BnccSkill { code: "EF03MA05", description: "Utilizar diferentes procedimentos de cálculo mental e escrito para resolver problemas significativos", knowledge_object: "Procedimentos de cálculo (mental e escrito)" },
                    BnccSkill { code: "EF03MA07", description: "Resolver e elaborar problemas de multiplicação pela adição de parcelas iguais", knowledge_object: "Significados da multiplicação e da divisão" },
                ],
            },
            BnccGrade {
                grade: "4º Ano",
                skills: &[
                    BnccSkill { code: "EF04MA01", description: "Ler, escrever e ordenar números naturais até a ordem de dezenas de milhar", knowledge_object: "Sistema de numeração decimal" },
                    BnccSkill { code: "EF04MA04", description: "Utilizar as relações entre adição e subtração, bem como entre multiplicação e divisão, para ampliar as estratégias de cálculo", knowledge_object: "Propriedades das operações" },
                    BnccSkill { code: "EF04MA09", description: "Reconhecer as frações unitárias mais usuais (1/2, 1/3, 1/4, 1/5, 1/10 e 1/100) como unidades de medida menores do que uma unidade", knowledge_object: "Números racionais: frações unitárias" },
                ],
            },
            BnccGrade {
                grade: "5º Ano",
                skills: &[
                    BnccSkill { code: "EF05MA01", description: "Ler, escrever e ordenar números naturais até a ordem das centenas de milhar com compreensão das principais características do sistema de numeração decimal", knowledge_object: "Sistema de numeração decimal" },
                    BnccSkill { code: "EF05MA03", description: "Identificar e representar frações (menores e maiores que a unidade), associando-as ao resultado de uma divisão ou à ideia de parte de um todo", knowledge_object: "Representação fracionária dos números racionais" },
                    BnccSkill { code: "EF05MA07", description: "Resolver e elaborar problemas de adição e subtração com números naturais e com números racionais, cuja representação decimal seja finita", knowledge_object: "Problemas: adição e subtração de números naturais e números racionais" },
                    BnccSkill { code: "EF05MA08", description: "Resolver e elaborar problemas de multiplicação e divisão com números naturais e com números racionais cuja representação decimal é finita", knowledge_object: "Problemas de multiplicação e divisão com números racionais" },
                ],
            },
            BnccGrade {
                grade: "6º Ano",
                skills: &[
                    BnccSkill { code: "EF06MA01", description: "Comparar, ordenar, ler e escrever números naturais e números racionais cuja representação decimal é finita, fazendo uso da reta numérica", knowledge_object: "Sistema de numeração decimal" },
                    BnccSkill { code: "EF06MA03", description: "Resolver e elaborar problemas que envolvam cálculos (mentais ou escritos, exatos ou aproximados) com números naturais", knowledge_object: "Operações com números naturais" },
                    BnccSkill { code: "EF06MA09", description: "Resolver e elaborar problemas que envolvam o cálculo da fração de uma quantidade e cujo resultado seja um número natural", knowledge_object: "Operações com números racionais" },
                    BnccSkill { code: "EF06MA13", description: "Resolver e elaborar problemas que envolvam porcentagens, com base na ideia de proporcionalidade", knowledge_object: "Cálculo de porcentagens" },
                ],
            },
            BnccGrade {
                grade: "7º Ano",
                skills: &[
                    BnccSkill { code: "EF07MA01", description: "Resolver e elaborar problemas com números naturais, envolvendo as noções de divisor e de múltiplo", knowledge_object: "Múltiplos e divisores de um número natural" },
                    BnccSkill { code: "EF07MA04", description: "Resolver e elaborar problemas que envolvam operações com números inteiros", knowledge_object: "Números inteiros" },
                    BnccSkill { code: "EF07MA09", description: "Utilizar, na resolução de problemas, a associação entre razão e fração", knowledge_object: "Fração e seus significados" },
                    BnccSkill { code: "EF07MA12", description: "Resolver e elaborar problemas que envolvam as operações com números racionais", knowledge_object: "Operações com números racionais" },
                    BnccSkill { code: "EF07MA17", description: "Resolver e elaborar problemas envolvendo equações do 1º grau", knowledge_object: "Equações polinomiais do 1º grau" },
                ],
            },
            BnccGrade {
                grade: "8º Ano",
                skills: &[
                    BnccSkill { code: "EF08MA01", description: "Efetuar cálculos com potências de expoentes inteiros e aplicar esse conhecimento na representação de números em notação científica", knowledge_object: "Potenciação e radiciação" },
                    BnccSkill { code: "EF08MA06", description: "Resolver e elaborar problemas que envolvam cálculo do valor numérico de expressões algébricas", knowledge_object: "Valor numérico de expressões algébricas" },
                    BnccSkill { code: "EF08MA08", description: "Resolver e elaborar problemas relacionados ao seu contexto próximo, que possam ser representados por equações polinomiais de 2º grau, redutíveis a equações de 1º grau", knowledge_object: "Equações polinomiais do 1º grau" },
                    BnccSkill { code: "EF08MA12", description: "Identificar a natureza da variação de duas grandezas, diretamente, inversamente proporcionais ou não proporcionais", knowledge_object: "Variação de grandezas" },
                ],
            },
            BnccGrade {
                grade: "9º Ano",
                skills: &[
                    BnccSkill { code: "EF09MA01", description: "Reconhecer que, uma vez fixada uma unidade de comprimento, existem segmentos de reta cujo comprimento não é expresso por número racional", knowledge_object: "Necessidade dos números reais" },
                    BnccSkill { code: "EF09MA06", description: "Compreender as funções como relações de dependência unívoca entre duas variáveis e suas representações numérica, algébrica e gráfica", knowledge_object: "Funções" },
                    BnccSkill { code: "EF09MA09", description: "Compreender os processos de fatoração de expressões algébricas, com base em suas relações com os produtos notáveis", knowledge_object: "Expressões algébricas" },
                ],
            },
        ],
    },
    BnccComponent {
        name: "Língua Portuguesa",
        grades: &[
            BnccGrade {
                grade: "1º Ano",
                skills: &[
                    BnccSkill { code: "EF01LP01", description: "Reconhecer que textos são lidos e escritos da esquerda para a direita e de cima para baixo da página", knowledge_object: "Protocolos de leitura" },
                    BnccSkill { code: "EF01LP05", description: "Reconhecer o sistema de escrita alfabética como representação dos sons da fala", knowledge_object: "Conhecimento do alfabeto" },
                ],
            },
            BnccGrade {
                grade: "4º Ano",
                skills: &[
                    BnccSkill { code: "EF04LP01", description: "Grafar palavras utilizando regras de correspondência fonema-grafema regulares diretas e contextuais", knowledge_object: "Construção do sistema alfabético e da ortografia" },
                    BnccSkill { code: "EF04LP15", description: "Distinguir fatos de opiniões/sugestões em textos informativos, jornalísticos e publicitários", knowledge_object: "Compreensão em leitura" },
                ],
            },
            BnccGrade {
                grade: "5º Ano",
                skills: &[
                    BnccSkill { code: "EF05LP01", description: "Grafar palavras utilizando regras de correspondência fonema-grafema regulares, contextuais e morfológicas e palavras de uso frequente com correspondências irregulares", knowledge_object: "Construção do sistema alfabético e da ortografia" },
                    BnccSkill { code: "EF05LP15", description: "Ler/assistir e compreender, com autonomia, notícias, reportagens, vídeos em vlogs argumentativos, dentre outros gêneros do campo da vida pública", knowledge_object: "Compreensão em leitura" },
                ],
            },
            BnccGrade {
                grade: "6º Ano",
                skills: &[
                    BnccSkill { code: "EF06LP01", description: "Reconhecer a impossibilidade de uma tradução totalmente fiel entre textos orais e escritos e atuação em situações formais", knowledge_object: "Variação linguística" },
                    BnccSkill { code: "EF06LP11", description: "Utilizar, ao produzir texto, conhecimentos linguísticos e gramaticais: tempos verbais, concordância nominal e verbal, regras ortográficas, pontuação", knowledge_object: "Sintaxe" },
                    BnccSkill { code: "EF67LP28", description: "Ler, de forma autônoma, e compreender textos literários de diferentes gêneros e extensões, inclusive aqueles sem ilustrações", knowledge_object: "Estratégias de leitura" },
                ],
            },
            BnccGrade {
                grade: "7º Ano",
                skills: &[
                    BnccSkill { code: "EF07LP04", description: "Reconhecer, em textos, o verbo como o núcleo das orações", knowledge_object: "Morfossintaxe" },
                    BnccSkill { code: "EF07LP14", description: "Identificar, em textos, os efeitos de sentido do uso de estratégias de modalização e argumentatividade", knowledge_object: "Modalização" },
                    BnccSkill { code: "EF67LP28", description: "Ler, de forma autônoma, e compreender textos literários de diferentes gêneros e extensões", knowledge_object: "Estratégias de leitura" },
                ],
            },
            BnccGrade {
                grade: "8º Ano",
                skills: &[
                    BnccSkill { code: "EF08LP04", description: "Utilizar, ao produzir texto, conhecimentos linguísticos e gramaticais: ortografia, regências e concordâncias nominal e verbal, modos e tempos verbais, pontuação", knowledge_object: "Fono-ortografia" },
                    BnccSkill { code: "EF08LP14", description: "Utilizar, ao produzir texto, recursos de coesão sequencial e referencial, bem como de concordância, regência e vozes verbais", knowledge_object: "Coesão" },
                    BnccSkill { code: "EF89LP33", description: "Ler, de forma autônoma, e compreender textos literários de diferentes gêneros e extensões, inclusive obras da tradição literária", knowledge_object: "Estratégias de leitura" },
                ],
            },
            BnccGrade {
                grade: "9º Ano",
                skills: &[
                    BnccSkill { code: "EF09LP04", description: "Escrever textos corretamente, de acordo com a norma-padrão, com estruturas sintáticas complexas no nível da oração e do período", knowledge_object: "Fono-ortografia" },
                    BnccSkill { code: "EF09LP11", description: "Inferir efeitos de sentido decorrentes do uso de recursos de coesão sequencial, da implicitude de informações e de estratégias argumentativas", knowledge_object: "Efeitos de sentido" },
                    BnccSkill { code: "EF89LP33", description: "Ler, de forma autônoma, e compreender textos literários de diferentes gêneros e extensões", knowledge_object: "Estratégias de leitura" },
                ],
            },
        ],
    },
    BnccComponent {
        name: "Ciências",
        grades: &[
            BnccGrade {
                grade: "3º Ano",
                skills: &[
                    BnccSkill { code: "EF03CI01", description: "Produzir diferentes sons a partir da vibração de variados objetos e identificar variáveis que influem nesse fenômeno", knowledge_object: "Produção de som" },
                    BnccSkill { code: "EF03CI04", description: "Identificar características sobre o modo de vida dos animais (hábitat, alimentação, período de atividade)", knowledge_object: "Características e desenvolvimento dos animais" },
                ],
            },
            BnccGrade {
                grade: "4º Ano",
                skills: &[
                    BnccSkill { code: "EF04CI02", description: "Testar e relatar transformações nos materiais do dia a dia quando expostos a diferentes condições", knowledge_object: "Transformações reversíveis e não reversíveis" },
                    BnccSkill { code: "EF04CI05", description: "Descrever e destacar semelhanças e diferenças entre o ciclo da matéria e o fluxo de energia entre os componentes vivos e não vivos de um ecossistema", knowledge_object: "Cadeias alimentares simples" },
                ],
            },
            BnccGrade {
                grade: "5º Ano",
                skills: &[
                    BnccSkill { code: "EF05CI01", description: "Explorar fenômenos da vida cotidiana que evidenciem propriedades físicas dos materiais", knowledge_object: "Propriedades físicas dos materiais" },
                    BnccSkill { code: "EF05CI06", description: "Selecionar argumentos que justifiquem por que os sistemas digestório e respiratório são considerados corresponsáveis pelo processo de nutrição do organismo", knowledge_object: "Nutrição do organismo" },
                ],
            },
            BnccGrade {
                grade: "6º Ano",
                skills: &[
                    BnccSkill { code: "EF06CI01", description: "Classificar como homogênea ou heterogênea a mistura de dois ou mais materiais", knowledge_object: "Misturas homogêneas e heterogêneas" },
                    BnccSkill { code: "EF06CI05", description: "Explicar a organização básica das células e seu papel como unidade estrutural e funcional dos seres vivos", knowledge_object: "Célula como unidade da vida" },
                    BnccSkill { code: "EF06CI06", description: "Concluir, com base na análise de ilustrações e/ou modelos, que os organismos são um complexo arranjo de sistemas com diferentes níveis de organização", knowledge_object: "Níveis de organização dos seres vivos" },
                ],
            },
            BnccGrade {
                grade: "7º Ano",
                skills: &[
                    BnccSkill { code: "EF07CI01", description: "Discutir a aplicação, ao longo da história, das máquinas simples e propor soluções e invenções para a realização de tarefas mecânicas cotidianas", knowledge_object: "Máquinas simples" },
                    BnccSkill { code: "EF07CI03", description: "Utilizar o conhecimento das formas de propagação do calor para justificar a utilização de determinados materiais em diferentes contextos", knowledge_object: "Propagação do calor" },
                    BnccSkill { code: "EF07CI04", description: "Avaliar o papel do equilíbrio termodinâmico para a manutenção da vida na Terra", knowledge_object: "Equilíbrio termodinâmico e vida na Terra" },
                    BnccSkill { code: "EF07CI06", description: "Discutir e avaliar mudanças econômicas, culturais e sociais, tanto na vida cotidiana quanto no mundo do trabalho, decorrentes do desenvolvimento de novos materiais e tecnologias", knowledge_object: "História dos combustíveis e das máquinas térmicas" },
                ],
            },
            BnccGrade {
                grade: "8º Ano",
                skills: &[
                    BnccSkill { code: "EF08CI01", description: "Identificar e classificar diferentes fontes (renováveis e não renováveis) e tipos de energia utilizados em residências, comunidades ou cidades", knowledge_object: "Fontes e tipos de energia" },
                    BnccSkill { code: "EF08CI07", description: "Comparar diferentes processos reprodutivos em plantas e animais em relação aos mecanismos adaptativos e evolutivos", knowledge_object: "Mecanismos reprodutivos" },
                    BnccSkill { code: "EF08CI08", description: "Analisar e explicar as transformações que ocorrem na puberdade considerando a atuação dos hormônios sexuais e do sistema nervoso", knowledge_object: "Puberdade e sistema reprodutor" },
                ],
            },
            BnccGrade {
                grade: "9º Ano",
                skills: &[
                    BnccSkill { code: "EF09CI01", description: "Investigar as mudanças de estado físico da matéria e explicar essas transformações com base no modelo de constituição submicroscópica", knowledge_object: "Aspectos quantitativos das transformações químicas" },
                    BnccSkill { code: "EF09CI04", description: "Planejar e executar experimentos que evidenciem que todas as cores de luz podem ser formadas pela composição das três cores primárias da luz", knowledge_object: "Estrutura da matéria" },
                    BnccSkill { code: "EF09CI06", description: "Classificar as radiações eletromagnéticas por suas frequências, fontes e aplicações, discutindo e avaliando implicações de seu uso", knowledge_object: "Radiações e suas aplicações" },
                ],
            },
        ],
    },
    BnccComponent {
        name: "História",
        grades: &[
            BnccGrade {
                grade: "4º Ano",
                skills: &[
                    BnccSkill { code: "EF04HI01", description: "Reconhecer a história como resultado da ação do ser humano no tempo e no espaço, com base na identificação de mudanças e permanências ao longo do tempo", knowledge_object: "Transformações e permanências" },
                    BnccSkill { code: "EF04HI03", description: "Identificar as transformações ocorridas na cidade ao longo do tempo e discutir suas interferências nos modos de vida de seus habitantes", knowledge_object: "O passado e o presente" },
                ],
            },
            BnccGrade {
                grade: "5º Ano",
                skills: &[
                    BnccSkill { code: "EF05HI01", description: "Identificar os processos de formação das culturas e dos povos, relacionando-os com o espaço geográfico ocupado", knowledge_object: "Povos e culturas" },
                    BnccSkill { code: "EF05HI03", description: "Analisar o papel das culturas e das religiões na composição identitária dos povos antigos", knowledge_object: "O papel das religiões e da cultura" },
                ],
            },
            BnccGrade {
                grade: "6º Ano",
                skills: &[
                    BnccSkill { code: "EF06HI01", description: "Identificar diferentes formas de compreensão da noção de tempo e de periodização dos processos históricos", knowledge_object: "A questão do tempo em História" },
                    BnccSkill { code: "EF06HI07", description: "Identificar aspectos e formas de registro das sociedades antigas na África, no Oriente Médio e nas Américas", knowledge_object: "As origens da humanidade" },
                    BnccSkill { code: "EF06HI14", description: "Identificar e analisar diferentes formas de contato, adaptação ou exclusão entre populações em diferentes tempos e espaços", knowledge_object: "Lógicas de organização política" },
                ],
            },
            BnccGrade {
                grade: "7º Ano",
                skills: &[
                    BnccSkill { code: "EF07HI01", description: "Explicar o significado de \"modernidade\" e suas lógicas de inclusão e exclusão, com base em uma concepção europeia", knowledge_object: "O mundo moderno e a conexão entre sociedades africanas, americanas e europeias" },
                    BnccSkill { code: "EF07HI09", description: "Analisar os diferentes impactos da conquista europeia da América para as populações ameríndias e identificar as formas de resistência", knowledge_object: "A conquista da América e as formas de organização política" },
                ],
            },
            BnccGrade {
                grade: "8º Ano",
                skills: &[
                    BnccSkill { code: "EF08HI01", description: "Identificar os principais aspectos conceituais do iluminismo e do liberalismo e discutir a relação entre eles e a organização do mundo contemporâneo", knowledge_object: "O mundo contemporâneo: o Antigo Regime em crise" },
                    BnccSkill { code: "EF08HI05", description: "Explicar os movimentos e as rebeliões da América portuguesa, articulando as temáticas locais e suas interfaces com processos ocorridos na Europa e nas Américas", knowledge_object: "Independências na América" },
                    BnccSkill { code: "EF08HI14", description: "Discutir a noção da alteridade e reconhecer as diversidades étnico-raciais na formação da sociedade brasileira", knowledge_object: "Os processos de independência nas Américas" },
                ],
            },
            BnccGrade {
                grade: "9º Ano",
                skills: &[
                    BnccSkill { code: "EF09HI01", description: "Descrever e contextualizar os principais aspectos sociais, culturais, econômicos e políticos da emergência da República no Brasil", knowledge_object: "Experiências republicanas e práticas autoritárias" },
                    BnccSkill { code: "EF09HI10", description: "Identificar e relacionar as dinâmicas do capitalismo e suas crises, os grandes conflitos mundiais e os conflitos vivenciados na Europa", knowledge_object: "A crise do capitalismo e a Segunda Guerra Mundial" },
                    BnccSkill { code: "EF09HI13", description: "Descrever e contextualizar os processos da emergência do fascismo e do nazismo, a consolidação dos estados totalitários e as práticas de extermínio", knowledge_object: "A emergência do fascismo e do nazismo" },
                    BnccSkill { code: "EF09HI16", description: "Relacionar a Carta dos Direitos Humanos ao processo de afirmação dos direitos fundamentais e de defesa da dignidade humana", knowledge_object: "A Organização das Nações Unidas e a questão dos Direitos Humanos" },
                ],
            },
        ],
    },
    BnccComponent {
        name: "Geografia",
        grades: &[
            BnccGrade {
                grade: "4º Ano",
                skills: &[
                    BnccSkill { code: "EF04GE01", description: "Selecionar, em seus lugares de vivência e em suas histórias familiares e/ou da comunidade, elementos de distintas culturas", knowledge_object: "Território e diversidade cultural" },
                    BnccSkill { code: "EF04GE06", description: "Identificar e descrever territórios étnico-culturais existentes no Brasil, tais como terras indígenas e de comunidades remanescentes de quilombos", knowledge_object: "Territórios étnico-culturais" },
                ],
            },
            BnccGrade {
                grade: "5º Ano",
                skills: &[
                    BnccSkill { code: "EF05GE01", description: "Descrever e analisar dinâmicas populacionais na Unidade da Federação em que vive, estabelecendo relações entre migrações e condições de infraestrutura", knowledge_object: "Dinâmica populacional" },
                    BnccSkill { code: "EF05GE09", description: "Estabelecer conexões e hierarquias entre diferentes cidades, utilizando mapas temáticos e representações gráficas", knowledge_object: "Representação das cidades e do campo" },
                ],
            },
            BnccGrade {
                grade: "6º Ano",
                skills: &[
                    BnccSkill { code: "EF06GE01", description: "Comparar modificações das paisagens nos lugares de vivência e os usos desses lugares em diferentes tempos", knowledge_object: "Identidade sociocultural" },
                    BnccSkill { code: "EF06GE05", description: "Relacionar padrões climáticos, tipos de solo, relevo e formações vegetais", knowledge_object: "Relação entre os componentes físico-naturais" },
                    BnccSkill { code: "EF06GE11", description: "Analisar distintas interações das sociedades com a natureza, com base na distribuição dos componentes físico-naturais", knowledge_object: "Biodiversidade e ciclo hidrológico" },
                ],
            },
            BnccGrade {
                grade: "7º Ano",
                skills: &[
                    BnccSkill { code: "EF07GE01", description: "Avaliar, por meio de exemplos extraídos dos meios de comunicação, ideias e estereótipos acerca das paisagens e da formação territorial do Brasil", knowledge_object: "Ideias e concepções sobre a formação territorial do Brasil" },
                    BnccSkill { code: "EF07GE06", description: "Discutir em que medida a produção, a circulação e o consumo de mercadorias provocam impactos ambientais, assim como conhecer propostas para mitigá-los", knowledge_object: "Produção, circulação e consumo de mercadorias" },
                ],
            },
            BnccGrade {
                grade: "8º Ano",
                skills: &[
                    BnccSkill { code: "EF08GE01", description: "Descrever as rotas de dispersão da população humana pelo planeta e os principais fluxos migratórios em diferentes períodos da história", knowledge_object: "Distribuição da população mundial e fluxos migratórios" },
                    BnccSkill { code: "EF08GE05", description: "Aplicar os conceitos de Estado, nação, território, governo e país para o entendimento de conflitos e tensões na contemporaneidade", knowledge_object: "Corporações e organismos internacionais" },
                ],
            },
            BnccGrade {
                grade: "9º Ano",
                skills: &[
                    BnccSkill { code: "EF09GE01", description: "Analisar criticamente de que forma a hegemonia europeia foi exercida em várias regiões do planeta", knowledge_object: "A hegemonia europeia na economia, na política e na cultura" },
                    BnccSkill { code: "EF09GE05", description: "Analisar fatos e situações para compreender a integração mundial e seus conflitos, com destaque para as áreas de interesse dos Estados Unidos e da China", knowledge_object: "Integração mundial e suas interpretações" },
                ],
            },
        ],
    },
];
