//! Validates and lays out generated source.

use thiserror::Error;

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("generated code is not valid Rust at {line}:{column}: {message}")]
pub struct FormatError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Checks that `source` parses as a Rust file, then re-indents it by bracket
/// depth. Lines are trimmed, runs of blank lines collapse into one and the
/// result ends with exactly one newline.
pub fn format_source(source: &str) -> Result<String, FormatError> {
    if let Err(err) = syn::parse_file(source) {
        let start = err.span().start();
        return Err(FormatError {
            message: err.to_string(),
            line: start.line,
            column: start.column + 1,
        });
    }
    Ok(reindent(source))
}

pub fn reindent(source: &str) -> String {
    let mut out = String::new();
    // Each entry counts the brackets a single line left open; one entry is
    // one level of indentation.
    let mut open: Vec<usize> = Vec::new();
    let mut pending_blank = false;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }

        let leading_closes = leading_close_count(trimmed);
        close(&mut open, leading_closes);

        let mut indent = open.len();
        if trimmed.starts_with('.') {
            indent += 1;
        }
        out.push_str(&INDENT.repeat(indent));
        out.push_str(trimmed);
        out.push('\n');

        let delta = bracket_delta(&trimmed[leading_closes..]);
        if delta > 0 {
            open.push(delta as usize);
        } else {
            close(&mut open, delta.unsigned_abs() as usize);
        }
    }

    out
}

fn close(open: &mut Vec<usize>, mut count: usize) {
    while count > 0 {
        let Some(top) = open.last_mut() else {
            return;
        };
        let used = count.min(*top);
        *top -= used;
        count -= used;
        if *top == 0 {
            open.pop();
        }
    }
}

fn leading_close_count(line: &str) -> usize {
    line.bytes()
        .take_while(|b| matches!(b, b'}' | b')' | b']'))
        .count()
}

fn bracket_delta(line: &str) -> i32 {
    let chars: Vec<char> = line.chars().collect();
    let mut delta: i32 = 0;
    let mut in_string = false;
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if in_string {
            match ch {
                '\\' => i += 1,
                '"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }
        match ch {
            '/' if chars.get(i + 1) == Some(&'/') => break,
            '"' => in_string = true,
            '\'' => i += char_literal_tail(&chars[i..]),
            '{' | '(' | '[' => delta += 1,
            '}' | ')' | ']' => delta -= 1,
            _ => {}
        }
        i += 1;
    }
    delta
}

/// Offset of the closing quote of a char literal opened at `chars[0]`, or
/// zero when the quote starts a lifetime or label.
fn char_literal_tail(chars: &[char]) -> usize {
    match chars.get(1) {
        Some('\\') => chars
            .iter()
            .skip(3)
            .position(|&c| c == '\'')
            .map_or(0, |end| end + 3),
        Some(_) if chars.get(2) == Some(&'\'') => 2,
        _ => 0,
    }
}
