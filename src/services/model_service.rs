use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntelligenceLevel {
    Basic,
    #[default]
    Normal,
    Advanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageStyle {
    Casual,
    #[default]
    Formal,
    Technical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub intelligence_level: IntelligenceLevel,
    pub language_style: LanguageStyle,
}

impl GenerationOptions {
    /// Options used by both question generation flows.
    pub fn advanced_formal() -> Self {
        Self {
            intelligence_level: IntelligenceLevel::Advanced,
            language_style: LanguageStyle::Formal,
        }
    }

    pub fn system_instructions(&self) -> String {
        let depth = match self.intelligence_level {
            IntelligenceLevel::Basic => "Explique de forma simples e direta, sem aprofundar.",
            IntelligenceLevel::Normal => "Equilibre clareza e profundidade nas respostas.",
            IntelligenceLevel::Advanced => {
                "Responda com profundidade e rigor conceitual, cobrindo nuances do tema."
            }
        };
        let tone = match self.language_style {
            LanguageStyle::Casual => "Use linguagem descontraída, mas respeitosa.",
            LanguageStyle::Formal => "Use linguagem formal e impessoal.",
            LanguageStyle::Technical => "Use a terminologia técnica da área.",
        };
        format!("{}\n{}", depth, tone)
    }
}

/// An external text-generation capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        session_id: &str,
        options: &GenerationOptions,
    ) -> AppResult<String>;
}
