//! Capture of multi-line blocks: list runs, blockquotes, and the
//! item/child split inside a list body.
//!
//! A block opens at a marker line and closes at a blank line, but only one
//! whose continuation text says the block is really over; an earlier blank
//! line followed by more list-like text extends the block instead. That
//! extend-until-accepted scan is what the plain rewrite rules cannot
//! express, so these passes drive the regex matches by hand.

use std::sync::LazyLock;

use regex::Regex;

use crate::rules::{Action, Rule, next_char_boundary};

static UNORDERED_HEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[-+*] ").unwrap());
static ORDERED_HEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\. ").unwrap());
static QUOTE_HEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> ").unwrap());

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-+*] ([^\n]+)\n").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\. ([^\n]+)\n").unwrap());

/// Quote markers are stripped one level per capture.
static QUOTE_MARGIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> ?").unwrap());

/// Child blocks are dedented by a fixed two-space margin; a second margin
/// is taken off lines that are not themselves nested structure.
static MARGIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^  ").unwrap());
static EXTRA_MARGIN: LazyLock<Rule> = LazyLock::new(|| {
    Rule::new(r"(?m)^  ", Action::Template("")).ahead(|rest| match rest.chars().next() {
        None => true,
        Some(c) if c.is_whitespace() => false,
        Some('-' | '+' | '*') => false,
        _ => !ordered_marker(rest),
    })
});

/// True when `s` begins with an ordered-list marker: one or more ASCII
/// digits followed by a dot.
pub(crate) fn ordered_marker(s: &str) -> bool {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && s.as_bytes().get(digits) == Some(&b'.')
}

/// Wrap maximal runs of unordered-marker lines in `<ul>`.
pub(crate) fn unordered_lists(text: &str) -> String {
    fold_blocks(text, &UNORDERED_HEAD, true, closes_unordered, |body| {
        log::debug!("captured unordered list block ({} bytes)", body.len());
        format!("<ul>\n{}</ul>\n\n", super::list_items(body))
    })
}

/// Wrap maximal runs of ordered-marker lines in `<ol>`.
pub(crate) fn ordered_lists(text: &str) -> String {
    fold_blocks(text, &ORDERED_HEAD, true, closes_ordered, |body| {
        log::debug!("captured ordered list block ({} bytes)", body.len());
        format!("<ol>\n{}</ol>\n\n", super::list_items(body))
    })
}

/// Wrap quoted runs in `<blockquote>`; the body loses its markers and then
/// reads like any document, so quotes may contain headings, lists, and
/// further quotes.
pub(crate) fn blockquotes(text: &str) -> String {
    fold_blocks(
        text,
        &QUOTE_HEAD,
        false,
        |_| true,
        |body| {
            log::debug!("captured blockquote ({} bytes)", body.len());
            let inner = super::document(&QUOTE_MARGIN.replace_all(body, ""));
            format!("<blockquote>\n{inner}</blockquote>\n\n")
        },
    )
}

/// Split unordered items that carry an indented child block.
pub(crate) fn nested_unordered_items(text: &str) -> String {
    fold_items(text, &UNORDERED_ITEM, |rest| {
        matches!(rest.chars().next(), Some('-' | '+' | '*'))
    })
}

/// Split ordered items that carry an indented child block.
pub(crate) fn nested_ordered_items(text: &str) -> String {
    fold_items(text, &ORDERED_ITEM, ordered_marker)
}

/// A list block is over when its blank line is not followed by more of the
/// same structure: indentation or another marker keeps it open. End of
/// input closes unconditionally.
fn closes_unordered(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => !c.is_whitespace() && !matches!(c, '-' | '+' | '*'),
    }
}

fn closes_ordered(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) if c.is_whitespace() => false,
        _ => !ordered_marker(rest),
    }
}

/// Replace every block opened by a `head` match and closed by the first
/// blank line whose following text satisfies `closes`. The body handed to
/// `render` starts at the marker (lists) or just after it (quotes) and
/// excludes the closing blank line, which `render` re-emits.
fn fold_blocks(
    text: &str,
    head: &Regex,
    body_from_marker: bool,
    closes: impl Fn(&str) -> bool,
    render: impl Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut from = 0;

    while from <= text.len() {
        let Some(opener) = head.find_at(text, from) else {
            break;
        };
        let Some(close) = find_close(text, opener.end(), &closes) else {
            from = next_char_boundary(text, opener.start());
            continue;
        };

        let body_start = if body_from_marker {
            opener.start()
        } else {
            opener.end()
        };
        out.push_str(&text[copied..opener.start()]);
        out.push_str(&render(&text[body_start..close]));
        copied = close + 2;
        from = copied;
    }

    out.push_str(&text[copied..]);
    out
}

/// First `\n\n` leaving at least one character of body, whose tail is
/// accepted by `closes`.
fn find_close(text: &str, body_start: usize, closes: &impl Fn(&str) -> bool) -> Option<usize> {
    let mut search = next_char_boundary(text, body_start);
    while search < text.len() {
        let offset = text[search..].find("\n\n")?;
        let close = search + offset;
        if closes(&text[close + 2..]) {
            return Some(close);
        }
        search = close + 1;
    }
    None
}

/// Replace every `head`-matched item line that is followed by an indented
/// child block. The child runs to the first newline that opens a sibling
/// item (per `sibling`) or to the end of the text; the sibling boundary is
/// left in place for the next round.
fn fold_items(text: &str, head: &Regex, sibling: impl Fn(&str) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut from = 0;

    while from <= text.len() {
        let Some(caps) = head.captures_at(text, from) else {
            break;
        };
        let opener = caps.get(0).unwrap();
        let Some(child_end) = child_boundary(text, opener.end(), &sibling) else {
            from = next_char_boundary(text, opener.start());
            continue;
        };

        out.push_str(&text[copied..opener.start()]);
        out.push_str(&wrap_item(&caps[1], &text[opener.end()..child_end]));
        copied = child_end;
        from = child_end;
    }

    out.push_str(&text[copied..]);
    out
}

/// Extent of an item's child block: it must open with whitespace (the
/// continuation indent), span at least two characters, and runs to the
/// first sibling boundary or end of text.
fn child_boundary(text: &str, start: usize, sibling: &impl Fn(&str) -> bool) -> Option<usize> {
    let mut chars = text[start..].chars();
    let first = chars.next()?;
    if !first.is_whitespace() {
        return None;
    }
    let second = chars.next()?;

    let mut search = start + first.len_utf8() + second.len_utf8();
    while search < text.len() {
        match text[search..].find('\n') {
            Some(offset) => {
                let at = search + offset;
                if sibling(&text[at + 1..]) {
                    return Some(at);
                }
                search = at + 1;
            }
            None => break,
        }
    }
    Some(text.len())
}

/// Render one item plus its child block: both halves are converted as full
/// documents (the child's own marker lines pick up their list wrapper
/// there) and glued into a single `<li>`.
fn wrap_item(item: &str, child: &str) -> String {
    let child = dedent(child);
    let item = super::document(item);
    let child = super::document(&child);
    format!("<li>{}\n{}\n</li>", item.trim(), child.trim())
}

fn dedent(child: &str) -> String {
    EXTRA_MARGIN.apply(&MARGIN.replace_all(child, ""))
}
