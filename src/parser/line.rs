use std::sync::LazyLock;

use regex::Regex;

use crate::tree::glyph::{BranchMarker, INDENT_BLOCK, SEPARATOR, VERTICAL};

/// Indent run, optional connector, then a name that starts with a real character.
static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<indent>[│ \t]*)(?<marker>[├└]── )?(?<name>[^│├└\s/].*?)/?$")
        .expect("entry line pattern is valid")
});

/// One non-root line of a diagram, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine<'a> {
    pub indent: &'a str,
    pub marker: Option<BranchMarker>,
    pub name: &'a str,
    pub is_directory: bool,
}

impl<'a> EntryLine<'a> {
    /// Returns `None` for lines that carry no entry: blank lines, lone
    /// continuation glyphs and other decoration.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_end();
        let captures = ENTRY_LINE.captures(line)?;

        let indent = captures.name("indent").map_or("", |m| m.as_str());
        let marker = captures
            .name("marker")
            .and_then(|m| BranchMarker::from_token(m.as_str()));
        let name = captures.name("name")?.as_str();

        Some(EntryLine {
            indent,
            marker,
            name,
            is_directory: line.ends_with(SEPARATOR),
        })
    }

    /// Nesting level below the root: every continuation glyph and every
    /// four-space block in the indent counts as one level.
    pub fn level(&self) -> usize {
        self.indent.matches(VERTICAL).count() + self.indent.matches(INDENT_BLOCK).count()
    }
}

/// Name of the root entry, or `None` when the line holds nothing usable.
/// A line opening with tree glyphs is an entry, never a root.
pub fn root_name(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.starts_with(['│', '├', '└']) {
        return None;
    }
    let name = line.strip_suffix(SEPARATOR).unwrap_or(line);
    (!name.is_empty()).then_some(name)
}
