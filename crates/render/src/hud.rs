use std::collections::BTreeMap;

/// A text label shown on the heads-up display, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLabel {
    pub id: String,
    pub text: String,
}

impl HudLabel {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Side-effecting HUD output. Drawing a label with an existing id replaces it.
pub trait HudWriter {
    fn draw(&mut self, label: HudLabel);
}

/// In-memory HUD that keeps the latest text per label id.
///
/// Hosts render its contents however they like; the CLI prints them.
#[derive(Debug, Clone, Default)]
pub struct LabelBoard {
    labels: BTreeMap<String, String>,
}

impl LabelBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl HudWriter for LabelBoard {
    fn draw(&mut self, label: HudLabel) {
        tracing::debug!(id = %label.id, text = %label.text, "hud label");
        self.labels.insert(label.id, label.text);
    }
}
