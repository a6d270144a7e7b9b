//! Free text from the profile or the service.

use std::fmt::{self, Write};

/// Free text written so that none of its lines opens a heading or a quote.
///
/// Lines starting with `#` or `>` are reserved for page structure and error
/// alerts, so a leading marker in the text is escaped with a backslash.
pub(crate) struct Text<'a> {
    text: &'a str,
    line_start: bool,
}

impl<'a> Text<'a> {
    /// Text that begins a line of its own.
    pub(crate) fn block(text: &'a str) -> Self {
        Self {
            text,
            line_start: true,
        }
    }

    /// Text written after other content on the same line.
    pub(crate) fn inline(text: &'a str) -> Self {
        Self {
            text,
            line_start: false,
        }
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.text.split('\n').enumerate() {
            if index > 0 {
                f.write_char('\n')?;
            }
            if (index > 0 || self.line_start) && line.starts_with(|c: char| c == '#' || c == '>') {
                f.write_char('\\')?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
