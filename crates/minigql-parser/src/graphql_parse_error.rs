use crate::ByteSpan;
use crate::GraphQLParseErrorKind;

/// A parse error with location information.
///
/// Spans are byte offsets; line and column numbers are only computed when
/// the error is formatted against its source text.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:` after argument name", "unclosed `{`"
    message: String,

    /// Where the error was detected.
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "unclosed delimiter" errors: the end-of-input position
    span: ByteSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: ByteSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span where the error was detected.
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// 14..15: error: expected `:` after argument name
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}..{}: error: {}",
            self.span.start,
            self.span.end,
            self.message,
        )
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:` after argument name
    ///   --> <input>:1:17
    ///    |
    ///  1 | query { user(id 1) }
    ///    |                 ^
    /// ```
    ///
    /// When `source` is `None` the location falls back to byte offsets and
    /// the snippet is omitted.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let Some(src) = source else {
            output.push_str(&format!(
                "  --> <input>@{}..{}\n",
                self.span.start,
                self.span.end,
            ));
            return output;
        };

        let (line, column) = line_and_column(src, self.span.start as usize);
        output.push_str(&format!("  --> <input>:{}:{}\n", line + 1, column + 1));

        if let Some(line_content) = src.lines().nth(line) {
            let display_line_num = line + 1;
            let width = display_line_num.to_string().len().max(2);
            let underline_len = src
                .get(self.span.start as usize..self.span.end as usize)
                .map(|text| text.chars().take_while(|c| *c != '\n').count())
                .filter(|len| *len > 0)
                .unwrap_or(1);

            output.push_str(&format!("{:>width$} |\n", ""));
            output.push_str(&format!(
                "{display_line_num:>width$} | {line_content}\n"
            ));
            output.push_str(&format!(
                "{:>width$} | {:>column$}{}\n",
                "",
                "",
                "^".repeat(underline_len),
            ));
        }

        output
    }
}

/// Computes the 0-based (line, column) of `byte_offset` in `source`.
/// Columns count characters, not bytes.
fn line_and_column(source: &str, byte_offset: usize) -> (usize, usize) {
    let offset = byte_offset.min(source.len());
    let mut line = 0;
    let mut line_start = 0;
    for (idx, byte) in source.as_bytes()[..offset].iter().enumerate() {
        if *byte == b'\n' {
            line += 1;
            line_start = idx + 1;
        }
    }
    let column = source
        .get(line_start..offset)
        .map_or(0, |prefix| prefix.chars().count());
    (line, column)
}
