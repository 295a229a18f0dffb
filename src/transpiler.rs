//! The transformation pipelines: an ordered list of substitution passes for
//! whole documents, a reduced list for the bodies of captured list blocks,
//! and marker stripping for blockquote bodies.
//!
//! Order encodes precedence. Headings resolve before list capture so a dash
//! underline is not read as a list marker; line joining runs after block
//! capture so it cannot collapse structure; emphasis runs last so delimiters
//! never match across unrendered block boundaries.

mod blocks;

use std::sync::LazyLock;

use regex::Captures;

use crate::rules::{Action, Rule};

/// One step of a pipeline: a guarded rewrite or a bespoke pass.
pub(crate) enum Pass {
    Rewrite(Rule),
    Custom(fn(&str) -> String),
}

/// Top-level rule set, applied to whole documents and, recursively, to
/// blockquote bodies and list-item text.
static DOCUMENT: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    vec![
        // Cleanup: normalize line endings, collapse runs of blank lines.
        Pass::Rewrite(Rule::new(r"\r\n", Action::Template("\n"))),
        Pass::Rewrite(Rule::new(r"\n{3,}", Action::Template("\n\n"))),
        // Setext headings.
        Pass::Rewrite(Rule::new(
            r"(?m)^(.+)\n=+$",
            Action::Template("<h1>${1}</h1>"),
        )),
        Pass::Rewrite(Rule::new(
            r"(?m)^(.+)\n-+$",
            Action::Template("<h2>${1}</h2>"),
        )),
        // ATX headings.
        Pass::Rewrite(Rule::new(r"(?m)^# (.+)$", Action::Template("<h1>${1}</h1>"))),
        Pass::Rewrite(Rule::new(r"(?m)^## (.+)$", Action::Template("<h2>${1}</h2>"))),
        Pass::Rewrite(Rule::new(r"(?m)^### (.+)$", Action::Template("<h3>${1}</h3>"))),
        Pass::Rewrite(Rule::new(r"(?m)^#### (.+)$", Action::Template("<h4>${1}</h4>"))),
        Pass::Rewrite(Rule::new(r"(?m)^##### (.+)$", Action::Template("<h5>${1}</h5>"))),
        Pass::Rewrite(Rule::new(r"(?m)^###### (.+)$", Action::Template("<h6>${1}</h6>"))),
        // Block structure. Unordered capture runs first and wins ties.
        Pass::Custom(blocks::unordered_lists),
        Pass::Custom(blocks::ordered_lists),
        Pass::Custom(blocks::blockquotes),
        // Forced breaks: two trailing spaces, except on an otherwise empty
        // line. Stray quote markers after the break are swallowed.
        Pass::Rewrite(
            Rule::new(r"  \n>*", Action::Template("<br>"))
                .behind(|prev| prev.is_some_and(|c| c != '\n')),
        ),
        // Soft-wrap joining: a lone newline inside a paragraph becomes a
        // space. Newlines adjacent to blank lines, quote markers, or
        // rendered tags are structural and stay.
        Pass::Rewrite(
            Rule::new(r"\n", Action::Template(" "))
                .behind(|prev| !matches!(prev, Some('\n' | '>')))
                .ahead(|rest| !starts_structure(rest)),
        ),
        // Emphasis, strong before single so `**` is never read as two `*`.
        // An escaped delimiter never opens a span; an unclosed one simply
        // fails to match and stays literal.
        Pass::Rewrite(
            Rule::new(
                r"(?s)\*\*([^\s*](?:.*?[^\s\\])?)\*\*",
                Action::Template("<strong>${1}</strong>"),
            )
            .behind(not_escaped),
        ),
        Pass::Rewrite(
            Rule::new(
                r"(?s)__([^\s_](?:.*?[^\s\\])?)__",
                Action::Template("<strong>${1}</strong>"),
            )
            .behind(not_escaped),
        ),
        Pass::Rewrite(
            Rule::new(
                r"(?s)\*([^\s*](?:.*?[^\s\\])?)\*",
                Action::Template("<em>${1}</em>"),
            )
            .behind(not_escaped),
        ),
        Pass::Rewrite(
            Rule::new(
                r"(?s)_([^\s_](?:.*?[^\s\\])?)_",
                Action::Template("<em>${1}</em>"),
            )
            .behind(not_escaped),
        ),
    ]
});

/// Reduced rule set for the body of one captured list block.
static LIST_ITEMS: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    vec![
        // Join soft-wrapped item lines, eating up to two spaces of
        // continuation indent.
        Pass::Rewrite(
            Rule::new(r"\n {0,2}", Action::Template(" "))
                .behind(|prev| prev != Some('\n'))
                .ahead(|rest| !starts_item(rest)),
        ),
        // Items carrying an indented child block (nested lists, wrapped
        // paragraphs) are split and recursed into.
        Pass::Custom(blocks::nested_unordered_items),
        Pass::Custom(blocks::nested_ordered_items),
        // What remains are plain single-line items.
        Pass::Rewrite(Rule::new(r"(?m)^[-+*] (.+)$", Action::Call(plain_item))),
        Pass::Rewrite(Rule::new(r"(?m)^\d+\. (.+)$", Action::Call(plain_item))),
    ]
});

/// Run `text` through the full document rule set.
pub(crate) fn document(text: &str) -> String {
    run(&DOCUMENT, text)
}

/// Render the body of one list block as a sequence of `<li>` elements.
pub(crate) fn list_items(text: &str) -> String {
    run(&LIST_ITEMS, text)
}

/// Thread the text buffer through each pass in declaration order. The
/// trailing blank line added here is what block capture terminates on when
/// a block sits at the end of the input; the result always ends in exactly
/// one newline.
fn run(passes: &[Pass], text: &str) -> String {
    let mut text = format!("{}\n\n", text.trim());
    for pass in passes {
        text = match pass {
            Pass::Rewrite(rule) => rule.apply(&text),
            Pass::Custom(pass) => pass(&text),
        };
    }
    format!("{}\n", text.trim())
}

fn plain_item(caps: &Captures) -> String {
    format!("<li>{}</li>", document(&caps[1]).trim())
}

fn not_escaped(prev: Option<char>) -> bool {
    prev != Some('\\')
}

/// Would joining a newline here pull a block-structure line (or rendered
/// tag) into the paragraph?
fn starts_structure(rest: &str) -> bool {
    match rest.chars().next() {
        None => false,
        Some(c) if c.is_whitespace() => true,
        Some('-' | '+' | '*' | '<' | '>') => true,
        _ => blocks::ordered_marker(rest),
    }
}

/// Like [`starts_structure`], scoped to list content: quote markers also
/// block the join, rendered tags do not exist yet at this stage.
fn starts_item(rest: &str) -> bool {
    match rest.chars().next() {
        None => false,
        Some(c) if c.is_whitespace() => true,
        Some('-' | '+' | '*' | '>') => true,
        _ => blocks::ordered_marker(rest),
    }
}
