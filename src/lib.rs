//! A small Markdown to HTML converter.
//!
//! The conversion is a pipeline of ordered substitution passes over the
//! document text: cleanup, headings, list and blockquote capture, line
//! joining, then inline emphasis. Captured list and quote bodies are run
//! back through the pipelines recursively, which is how nesting works.
//! There is no syntax tree; order of application encodes precedence.
//!
//! The supported subset: ATX and Setext headings, unordered and ordered
//! lists (including nesting), blockquotes, hard/soft line breaks, and
//! `*`/`**`/`_`/`__` emphasis.

mod rules;
mod transpiler;

/// Converts a Markdown document to HTML.
///
/// Total over any input: malformed or unbalanced markup simply fails to
/// match its rule and passes through as literal text. The result always
/// ends in exactly one newline.
///
/// # Examples
///
/// ```
/// use md2html::convert;
///
/// let html = convert("# Title\n\nSome *emphasis*.\n");
/// assert_eq!(html, "<h1>Title</h1>\n\nSome <em>emphasis</em>.\n");
/// ```
pub fn convert(input: &str) -> String {
    transpiler::document(input)
}
