//! Placeholder substitution engine for line-based templates.
//!
//! A template is an ordered slice of lines. A line starting with `$` is a
//! placeholder token for its entire line; every other line is a literal.
//! Literals are emitted followed by a newline, placeholder values are
//! emitted verbatim. Values come from registered zero-argument producers,
//! each evaluated lazily and at most once.

use std::collections::HashMap;

/// A template evaluator wired with one producer per placeholder token.
///
/// # Examples
///
/// ```
/// use jotter::export::Replacer;
///
/// let output = Replacer::new(&["<h1>", "$TITLE", "</h1>"])
///     .variable("TITLE", || "Hello".to_string())
///     .replace();
/// assert_eq!(output, "<h1>\nHello</h1>\n");
/// ```
pub struct Replacer<'a> {
    template: &'a [&'a str],
    producers: HashMap<&'a str, Box<dyn Fn() -> String + 'a>>,
}

impl<'a> Replacer<'a> {
    /// Creates a replacer over a template.
    pub fn new(template: &'a [&'a str]) -> Self {
        Self {
            template,
            producers: HashMap::new(),
        }
    }

    /// Registers the producer for a placeholder token.
    ///
    /// `name` excludes the `$` sigil: `"TITLE"` matches the template line
    /// `"$TITLE"`.
    pub fn variable(mut self, name: &'a str, producer: impl Fn() -> String + 'a) -> Self {
        self.producers.insert(name, Box::new(producer));
        self
    }

    /// Evaluates the template into a single string.
    ///
    /// Each producer runs at most once; repeated occurrences of a token
    /// reuse the first result.
    ///
    /// # Panics
    ///
    /// Panics when the template contains a placeholder with no registered
    /// producer. That is a template/renderer authoring bug, not a
    /// recoverable condition.
    pub fn replace(self) -> String {
        let mut out = String::new();
        let mut cache: HashMap<&str, String> = HashMap::new();

        for line in self.template {
            match line.strip_prefix('$') {
                Some(name) => {
                    if !cache.contains_key(name) {
                        let producer = self
                            .producers
                            .get(name)
                            .unwrap_or_else(|| panic!("no producer registered for placeholder ${name}"));
                        cache.insert(name, producer());
                    }
                    out.push_str(&cache[name]);
                }
                None => {
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn test_literals_are_newline_terminated() {
        let output = Replacer::new(&["a", "b"]).replace();

        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_placeholder_substitution() {
        let output = Replacer::new(&["<p>", "$TEXT", "</p>"])
            .variable("TEXT", || "hello".to_string())
            .replace();

        assert_eq!(output, "<p>\nhello</p>\n");
    }

    #[test]
    fn test_placeholder_value_has_no_terminator() {
        let output = Replacer::new(&["$A", "$B"])
            .variable("A", || "x".to_string())
            .variable("B", || "y".to_string())
            .replace();

        assert_eq!(output, "xy");
    }

    #[test]
    fn test_repeated_token_evaluated_once() {
        let calls = Cell::new(0);
        let output = Replacer::new(&["$TITLE", "-", "$TITLE"])
            .variable("TITLE", || {
                calls.set(calls.get() + 1);
                "t".to_string()
            })
            .replace();

        assert_eq!(output, "t-\nt");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    #[should_panic(expected = "no producer registered for placeholder $MISSING")]
    fn test_unregistered_placeholder_panics() {
        Replacer::new(&["$MISSING"]).replace();
    }

    #[test]
    fn test_unused_producers_are_not_called() {
        let calls = Cell::new(0);
        Replacer::new(&["literal only"])
            .variable("UNUSED", || {
                calls.set(calls.get() + 1);
                String::new()
            })
            .replace();

        assert_eq!(calls.get(), 0);
    }
}
