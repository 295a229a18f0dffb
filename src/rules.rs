//! The substitution engine: ordered pattern/replacement rules with
//! non-consuming context guards.

use regex::{Captures, Regex};

/// How a matched rule computes its replacement.
pub(crate) enum Action {
    /// Fixed template, expanded with `${n}` capture references.
    Template(&'static str),
    /// Replacement computed from the captured groups.
    Call(fn(&Captures) -> String),
}

/// A single rewrite pass: a pattern, its replacement action, and optional
/// guards on the surrounding text.
///
/// Guards stand in for zero-width assertions: `behind` sees the character
/// immediately before a candidate match (`None` at the start of the text),
/// `ahead` sees everything after it. A rejected candidate is skipped and
/// the scan resumes one character further on, so guards never consume the
/// context they inspect.
pub(crate) struct Rule {
    pattern: Regex,
    action: Action,
    behind: Option<fn(Option<char>) -> bool>,
    ahead: Option<fn(&str) -> bool>,
}

impl Rule {
    pub(crate) fn new(pattern: &str, action: Action) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            action,
            behind: None,
            ahead: None,
        }
    }

    /// Require the character before the match to satisfy `guard`.
    pub(crate) fn behind(mut self, guard: fn(Option<char>) -> bool) -> Self {
        self.behind = Some(guard);
        self
    }

    /// Require the text after the match to satisfy `guard`.
    pub(crate) fn ahead(mut self, guard: fn(&str) -> bool) -> Self {
        self.ahead = Some(guard);
        self
    }

    /// Replace every guarded match, scanning left to right. Replacements
    /// are not rescanned.
    pub(crate) fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut from = 0;

        while from <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, from) else {
                break;
            };
            let m = caps.get(0).unwrap();

            let prev = text[..m.start()].chars().next_back();
            let behind_ok = self.behind.is_none_or(|guard| guard(prev));
            let ahead_ok = self.ahead.is_none_or(|guard| guard(&text[m.end()..]));
            if !behind_ok || !ahead_ok {
                from = next_char_boundary(text, m.start());
                continue;
            }

            out.push_str(&text[copied..m.start()]);
            match &self.action {
                Action::Template(template) => caps.expand(template, &mut out),
                Action::Call(replacer) => out.push_str(&replacer(&caps)),
            }
            copied = m.end();
            from = if m.end() > m.start() {
                m.end()
            } else {
                next_char_boundary(text, m.end())
            };
        }

        out.push_str(&text[copied..]);
        out
    }
}

/// Smallest char boundary strictly after `at` (may be `len + 1`, which ends
/// the scan loop).
pub(crate) fn next_char_boundary(text: &str, at: usize) -> usize {
    let mut next = at + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}
