/// Somewhere verse lines can be written and later published.
pub trait Sheet {
    fn write(&mut self, line: &str);

    fn publish(&self) -> String;
}

/// Ordered, capitalised lines of a single verse.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lyrics {
    lines: Vec<String>,
}

impl Lyrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Sheet for Lyrics {
    fn write(&mut self, line: &str) {
        self.lines.push(capitalize(line));
    }

    fn publish(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

fn capitalize(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
