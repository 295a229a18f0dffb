use clap::Parser;

#[derive(Parser)]
#[command(name = "md2html")]
#[command(author, version)]
#[command(about = "Convert Markdown documents to HTML")]
#[command(
    long_about = "md2html converts a Markdown document to HTML through a fixed sequence of \
    substitution passes. It covers headings, nested lists, blockquotes, paragraph joining, \
    and inline emphasis; malformed markup passes through as literal text rather than \
    producing an error."
)]
#[command(after_help = "\
EXAMPLES:

    # Convert a file; output goes to document.html next to it
    md2html document.md

    # Convert to an explicit destination
    md2html document.md out/document.html

    # Read from stdin, write to stdout
    cat document.md | md2html -

    # Convert a file to stdout
    md2html document.md -

Set RUST_LOG=debug to see how the source and destination were resolved.")]
pub struct Cli {
    /// Input file, or `-` for stdin
    #[arg(help = "Input file path, or - for stdin")]
    pub source: String,

    /// Output file, or `-` for stdout
    #[arg(help = "Output file path, or - for stdout")]
    #[arg(
        long_help = "Path to write the HTML to, or - for stdout. When omitted, a file source \
        writes next to itself with the extension replaced by .html, and a stdin source writes \
        to stdout."
    )]
    pub dest: Option<String>,
}
