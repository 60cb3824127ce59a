use serde::{Deserialize, Serialize};

/// Paper layout for printed slips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipLayout {
    /// Characters per printed line (32 on common 58 mm thermal rolls).
    pub width: usize,

    /// Character for the rule under the letterhead.
    pub heavy_rule: char,

    /// Character for the rules around the prescription.
    pub light_rule: char,
}

impl Default for SlipLayout {
    fn default() -> Self {
        Self {
            width: 32,
            heavy_rule: '=',
            light_rule: '-',
        }
    }
}

impl SlipLayout {
    pub fn heavy_rule(&self) -> String {
        self.heavy_rule.to_string().repeat(self.width)
    }

    pub fn light_rule(&self) -> String {
        self.light_rule.to_string().repeat(self.width)
    }
}

/// Wrap every line of `text` to at most `width` characters, breaking at
/// spaces where possible and splitting words longer than a whole line.
/// Blank lines are kept. A width of zero leaves the text unchanged.
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    text.lines()
        .flat_map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Hard-split words that cannot fit on any line.
        while word.len() > width {
            if current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            out.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || out.is_empty() {
        out.push(current);
    }
    out
}
