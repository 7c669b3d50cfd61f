//! # Feature: Persona System
//!
//! Expert personas that condition the model's answer. Each persona has a unique
//! system prompt loaded from prompt/*.md files at compile time.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Registry keeps display order for the persona selector
//! - 1.0.0: Initial release with compliance, data science and CX personas

use log::debug;

/// Instruction used when the selected label is not in the registry.
pub const DEFAULT_SYSTEM_PROMPT: &str = include_str!("../../../prompt/default.md");

#[derive(Debug, Clone)]
pub struct Persona {
    /// Label shown in the persona selector, also the lookup key
    pub label: String,
    pub system_prompt: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct PersonaManager {
    personas: Vec<Persona>,
}

impl Default for PersonaManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaManager {
    pub fn new() -> Self {
        // Order here is the order of the selector
        let personas = vec![
            Persona {
                label: "コンプライアンス（保険業）".to_string(),
                system_prompt: include_str!("../../../prompt/compliance.md").to_string(),
                description: "Life-insurance compliance: regulatory risk, internal procedure, sources to confirm"
                    .to_string(),
            },
            Persona {
                label: "データサイエンス".to_string(),
                system_prompt: include_str!("../../../prompt/data_science.md").to_string(),
                description: "Business analytics from problem definition through operation".to_string(),
            },
            Persona {
                label: "CX/サービスデザイン".to_string(),
                system_prompt: include_str!("../../../prompt/cx_design.md").to_string(),
                description: "Customer experience improvements ranked by priority".to_string(),
            },
        ];

        PersonaManager { personas }
    }

    pub fn get_persona(&self, label: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.label == label)
    }

    pub fn list_personas(&self) -> &[Persona] {
        &self.personas
    }

    /// Persona labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.label.as_str()).collect()
    }

    /// Resolve a label to its system prompt.
    ///
    /// Unknown labels silently get [`DEFAULT_SYSTEM_PROMPT`].
    pub fn get_system_prompt(&self, label: &str) -> &str {
        match self.get_persona(label) {
            Some(persona) => persona.system_prompt.as_str(),
            None => {
                debug!("Unknown persona '{label}', using default system prompt");
                DEFAULT_SYSTEM_PROMPT
            }
        }
    }
}
