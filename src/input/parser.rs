/// How a command line is cut into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Runs of whitespace separate words; no empty words.
    #[default]
    Collapse,
    /// Every single space separates words, so `a  b` carries an empty
    /// argument between `a` and `b`.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub args: Vec<String>,
}

/// Trims `line` and splits it into a command name and its arguments.
/// Returns `None` for a blank line.
pub fn parse_line(line: &str, mode: SplitMode) -> Option<ParsedLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut words: Vec<String> = match mode {
        SplitMode::Collapse => line.split_whitespace().map(String::from).collect(),
        SplitMode::Exact => line.split(' ').map(String::from).collect(),
    };

    let name = words.remove(0);
    Some(ParsedLine { name, args: words })
}
