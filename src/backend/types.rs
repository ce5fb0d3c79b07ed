use serde::Serialize;

/// The JSON body sent to the backend's generate endpoint. `model` is
/// the resolved identifier, never the caller's alias; `system` is only
/// serialized when the caller supplied a non-empty value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneratePayload {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl GeneratePayload {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, stream: bool) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream,
            system: None,
        }
    }

    /// Attaches a system prompt, dropping empty strings so the backend
    /// never sees a blank `system` field.
    pub fn with_system(mut self, system: Option<String>) -> Self {
        self.system = system.filter(|s| !s.is_empty());
        self
    }
}
