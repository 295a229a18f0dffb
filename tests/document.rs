//! End-to-end conversion of a document exercising every supported
//! construct at once.

use md2html::convert;
use similar_asserts::assert_eq;

#[test]
fn full_document() {
    let input = "\
Heading
=======

Intro paragraph
wrapped across lines.

## Features

- lists
- *emphasis*
  - nested

> quoted **text**

Tail line.
";

    let expected = "\
<h1>Heading</h1>

Intro paragraph wrapped across lines.

<h2>Features</h2>

<ul>
<li>lists</li>
<li><em>emphasis</em>
<ul>
<li>nested</li>
</ul>
</li>
</ul>

<blockquote>
quoted <strong>text</strong>
</blockquote>

Tail line.
";

    assert_eq!(convert(input), expected);
}

#[test]
fn conversion_is_total_over_odd_inputs() {
    for input in [
        "***",
        "**unclosed",
        "> ",
        "-",
        "1.",
        "\\",
        "a\u{00a0}b",
        "=====\n=====",
    ] {
        let html = convert(input);
        assert!(html.ends_with('\n'), "input {input:?}");
        assert!(!html[..html.len() - 1].ends_with('\n'), "input {input:?}");
    }
}
