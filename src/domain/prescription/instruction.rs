//! Recognition instruction value object

use super::language::Language;

const SPANISH_INSTRUCTION: &str = r#"Transcribe esta receta médica escrita a mano.

Instrucciones:
- Primero todos los datos del médico (nombre, especialidad, matrícula, contacto) y luego todos los datos del paciente
- Extrae para cada medicamento: Medicamento, Dosis, Frecuencia e Instrucciones
- Si hay abreviaturas médicas, escríbelas completas
- Si hay observaciones, transcríbelas lo más exactamente posible tal como están escritas
- Responde en español claro"#;

const ENGLISH_INSTRUCTION: &str = r#"Transcribe this handwritten medical prescription.

Instructions:
- First all of the practitioner's details (name, specialty, license number, contact) and then all of the patient's details
- For each medication extract: Medication, Dosage, Frequency and Instructions
- Expand any medical abbreviations in full
- If there are observations, transcribe them as exactly as they are written
- Respond in clear English"#;

/// Value object holding the fixed instruction sent alongside the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    language: Language,
    content: String,
}

impl Instruction {
    /// Build the instruction for a target language
    pub fn build(language: Language) -> Self {
        let content = match language {
            Language::Spanish => SPANISH_INSTRUCTION,
            Language::English => ENGLISH_INSTRUCTION,
        };
        Self {
            language,
            content: content.to_string(),
        }
    }

    /// Get the instruction text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Language the service is asked to respond in
    pub fn language(&self) -> Language {
        self.language
    }
}

impl Default for Instruction {
    fn default() -> Self {
        Self::build(Language::default())
    }
}
