use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn from_flag(ok: bool) -> Self {
        if ok { Tone::Success } else { Tone::Error }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tone::Success => "✔",
            Tone::Warning => "⚠",
            Tone::Error => "✖",
        }
    }

    /// Apply this tone's colour to `text`.
    pub fn paint(&self, text: &str) -> String {
        match self {
            Tone::Success => style(text).green().to_string(),
            Tone::Warning => style(text).yellow().to_string(),
            Tone::Error => style(text).red().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub tone: Tone,
    pub title: String,
    pub value: Option<String>,
    pub description: String,
}

impl ResultCard {
    pub fn new(tone: Tone, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { tone, title: title.into(), value: None, description: description.into() }
    }

    pub fn with_value(mut self, value: impl ToString) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} {}\n", self.tone.paint(self.tone.icon()), style(&self.title).bold());
        if let Some(value) = &self.value {
            out.push_str(&format!("    {}\n", self.tone.paint(&style(value).bold().to_string())));
        }
        out.push_str(&format!("    {}\n", style(&self.description).dim()));
        out
    }
}
