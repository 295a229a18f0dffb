use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use md2html::convert;

mod cli;
use cli::Cli;

/// A source or destination: a named file, or the process's standard stream.
enum Target {
    Stdio,
    File(PathBuf),
}

impl Target {
    fn parse(arg: &str) -> Self {
        if arg == "-" {
            Target::Stdio
        } else {
            Target::File(PathBuf::from(arg))
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let source = Target::parse(&cli.source);
    let dest = resolve_dest(&source, cli.dest.as_deref());

    let markdown = read_source(&source)?;

    // A bad destination aborts before the transformation; nothing is ever
    // partially written.
    if let Target::File(path) = &dest {
        check_dest_dir(path)?;
    }

    let html = convert(&markdown);
    write_dest(&dest, &html)
}

fn resolve_dest(source: &Target, dest: Option<&str>) -> Target {
    match dest {
        Some(arg) => Target::parse(arg),
        None => match source {
            Target::Stdio => Target::Stdio,
            Target::File(path) => {
                let out = path.with_extension("html");
                log::debug!("defaulting destination to {}", out.display());
                Target::File(out)
            }
        },
    }
}

fn check_dest_dir(path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if dir.is_dir() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: destination directory does not exist", dir.display()),
        ))
    }
}

fn read_source(source: &Target) -> io::Result<String> {
    match source {
        Target::Stdio => {
            log::debug!("reading from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Target::File(path) => {
            log::debug!("reading {}", path.display());
            fs::read_to_string(path).map_err(|err| annotate(err, path))
        }
    }
}

fn write_dest(dest: &Target, html: &str) -> io::Result<()> {
    match dest {
        Target::Stdio => io::stdout().write_all(html.as_bytes()),
        Target::File(path) => {
            log::debug!("writing {}", path.display());
            fs::write(path, html).map_err(|err| annotate(err, path))
        }
    }
}

fn annotate(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {err}", path.display()))
}
