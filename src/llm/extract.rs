//! Structured-result extraction from accumulated stream text
//!
//! The generative service is asked for JSON but streams it wrapped in
//! whatever narration it feels like producing. Extraction scans for balanced
//! top-level `{...}` objects, string- and escape-aware so braces inside
//! string literals do not confuse the depth count, and picks the last one.

/// Incremental scanner that yields complete top-level JSON objects as text
/// is fed in. Used to frame the service's streaming response, which arrives
/// as a JSON array of chunk objects split at arbitrary byte boundaries.
#[derive(Debug, Default)]
pub struct JsonObjectScanner {
    buffer: String,
    depth: usize,
    in_object: bool,
    in_string: bool,
    escaped: bool,
}

impl JsonObjectScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a text fragment; returns any objects completed by it.
    pub fn push(&mut self, text: &str) -> Vec<String> {
        let mut completed = Vec::new();

        for c in text.chars() {
            if self.in_object {
                self.buffer.push(c);

                if self.in_string {
                    if self.escaped {
                        self.escaped = false;
                    } else if c == '\\' {
                        self.escaped = true;
                    } else if c == '"' {
                        self.in_string = false;
                    }
                    continue;
                }

                match c {
                    '"' => self.in_string = true,
                    '{' => self.depth += 1,
                    '}' => {
                        self.depth -= 1;
                        if self.depth == 0 {
                            completed.push(std::mem::take(&mut self.buffer));
                            self.in_object = false;
                        }
                    }
                    _ => {}
                }
            } else if c == '{' {
                self.in_object = true;
                self.depth = 1;
                self.buffer.clear();
                self.buffer.push(c);
            }
        }

        completed
    }
}

/// Locate the last balanced top-level `{...}` substring in `text`.
///
/// Narration outside objects is ignored entirely; quotes only get string
/// semantics once inside an object, so an unpaired apostrophe or quote in
/// surrounding prose cannot swallow a later object.
pub fn last_json_object(text: &str) -> Option<&str> {
    let mut last: Option<(usize, usize)> = None;

    let mut start = 0usize;
    let mut depth = 0usize;
    let mut in_object = false;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if !in_object {
            if c == '{' {
                in_object = true;
                depth = 1;
                start = i;
            }
            continue;
        }

        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    last = Some((start, i + c.len_utf8()));
                    in_object = false;
                }
            }
            _ => {}
        }
    }

    last.map(|(s, e)| &text[s..e])
}
