use crate::error::GenerateError;
use serde::{Deserialize, Serialize};

/// Selects how process handlers are wired to inputs inside the generated trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Group nodes by kind only. Edges are never read and every handler
    /// receives the first input's state.
    #[default]
    Flat,
    /// Same declarations as `Flat`, but each handler receives the state of
    /// the input node wired into it, when one exists.
    Connected,
}

/// The configuration snapshot for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    #[serde(default)]
    pub component_name: String,
    #[serde(default = "default_true")]
    pub use_type_script: bool,
    #[serde(default = "default_true")]
    pub use_hooks: bool,
    #[serde(default)]
    pub mode: GenerationMode,
}

fn default_true() -> bool {
    true
}

impl GenerationSettings {
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            use_type_script: true,
            use_hooks: true,
            mode: GenerationMode::Flat,
        }
    }

    pub fn with_type_script(mut self, enabled: bool) -> Self {
        self.use_type_script = enabled;
        self
    }

    pub fn with_hooks(mut self, enabled: bool) -> Self {
        self.use_hooks = enabled;
        self
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the component name, or an error when it is blank.
    pub fn validated_component_name(&self) -> Result<&str, GenerateError> {
        if self.component_name.trim().is_empty() {
            Err(GenerateError::MissingComponentName)
        } else {
            Ok(&self.component_name)
        }
    }
}
