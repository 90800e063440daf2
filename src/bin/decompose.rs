use std::io;
use std::path::PathBuf;

use ascii_rects::{Figure, FigureError, Position, Rectangle, ShapeTally};
use log::warn;
use serde::Serialize;
use thiserror::Error;

const USAGE: &str = "Usage: decompose [<figure-file> | -] [--json] [--strict] [--limit <N>]";

#[derive(Debug, Default)]
struct CliOptions {
    input: Option<PathBuf>,
    json: bool,
    strict: bool,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RectangleReport {
    top_left: Position,
    bottom_right: Position,
    height: usize,
    width: usize,
    interior_blank: bool,
    rendering: String,
}

#[derive(Debug, Serialize)]
struct ShapeCount {
    height: usize,
    width: usize,
    count: usize,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                opts.json = true;
                i += 1;
            }
            "--strict" => {
                opts.strict = true;
                i += 1;
            }
            "--limit" => {
                let Some(v) = args.get(i + 1) else {
                    return Err("--limit requires an integer argument".to_string());
                };
                let n: usize = v
                    .parse()
                    .map_err(|e| format!("invalid --limit {v}: {e}"))?;
                opts.limit = Some(n);
                i += 2;
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            "-" if opts.input.is_none() => {
                i += 1;
            }
            x if !x.starts_with("--") && opts.input.is_none() => {
                opts.input = Some(PathBuf::from(x));
                i += 1;
            }
            x => return Err(format!("Unknown option: {x}\n{USAGE}")),
        }
    }
    Ok(opts)
}

fn report(figure: &Figure, rect: &Rectangle) -> RectangleReport {
    RectangleReport {
        top_left: rect.top_left(),
        bottom_right: rect.bottom_right(),
        height: rect.height(),
        width: rect.width(),
        interior_blank: rect.interior_is_blank(figure),
        rendering: rect.render(figure.line_ending()).into_string(),
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error("Rejected figure: {0}")]
    Rejected(#[source] FigureError),
    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RunError {
    fn exit_code(&self) -> i32 {
        match self {
            RunError::Rejected(_) => 2,
            RunError::Encode(_) => 1,
        }
    }
}

/// Decompose `figure` and format the result as the CLI prints it.
fn run(opts: &CliOptions, figure: &Figure) -> Result<String, RunError> {
    if opts.strict {
        figure.check_alphabet().map_err(RunError::Rejected)?;
    }

    let limit = opts.limit.unwrap_or(usize::MAX);
    let rects: Vec<Rectangle> = figure.rectangles().take(limit).collect();

    for rect in &rects {
        if !rect.interior_is_blank(figure) {
            warn!(
                "rectangle at {} has stray glyphs inside; rendered as blank",
                rect.top_left()
            );
        }
    }

    if opts.json {
        let tally: ShapeTally = rects.iter().copied().collect();
        let shapes: Vec<ShapeCount> = tally
            .sorted()
            .into_iter()
            .map(|(s, count)| ShapeCount {
                height: s.height,
                width: s.width,
                count,
            })
            .collect();
        let reports: Vec<RectangleReport> = rects.iter().map(|r| report(figure, r)).collect();

        let out = serde_json::json!({
            "rows": figure.height(),
            "columns": figure.width(),
            "rectangles": reports,
            "shapes": shapes,
        });
        return Ok(serde_json::to_string_pretty(&out)? + "\n");
    }

    let blocks: Vec<String> = rects
        .iter()
        .map(|r| r.render(figure.line_ending()).into_string())
        .collect();
    Ok(blocks.join(figure.line_ending().as_str()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let opts = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let loaded = match &opts.input {
        Some(path) => Figure::read_path(path),
        None => Figure::from_reader(io::stdin().lock(), "<stdin>"),
    };
    let figure = match loaded {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match run(&opts, &figure) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
