//! Command-line companion to the Nonopaint editor.
//!
//! Works on share texts without opening the canvas.
//!
//! # Usage
//!
//! Print the row and column clues of a share text:
//!
//! ```sh
//! nonopaint-cli clues AwIN
//! ```
//!
//! Print the picture using `#` for filled and `.` for empty cells:
//!
//! ```sh
//! nonopaint-cli show AwIN
//! ```
//!
//! Encode a picture read from a file (or stdin when omitted):
//!
//! ```sh
//! printf '##.\n.#.\n' | nonopaint-cli encode
//! ```

use std::{
    fs, io,
    io::Read as _,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use nonopaint_core::{CellGrid, DecodeError, EncodeError, GridClues, ParseGridError, codec};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the row and column clues of a share text.
    Clues {
        /// Share text produced by the editor's export.
        text: String,
    },
    /// Print the picture of a share text.
    Show {
        /// Share text produced by the editor's export.
        text: String,
    },
    /// Encode a `#`/`.` picture into a share text.
    Encode {
        /// Picture file to read; stdin when omitted.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("invalid share text: {_0}")]
    Decode(DecodeError),
    #[display("cannot encode picture: {_0}")]
    Encode(EncodeError),
    #[display("invalid picture: {_0}")]
    Parse(ParseGridError),
    #[display("cannot read input: {_0}")]
    Io(io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args.command) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Clues { text } => {
            let grid = codec::decode_grid(&text)?;
            log::debug!("decoded {}x{} puzzle", grid.width(), grid.height());
            Ok(format_clues(&GridClues::new(&grid)))
        }
        Command::Show { text } => {
            let grid = codec::decode_grid(&text)?;
            Ok(format!("{grid}\n"))
        }
        Command::Encode { file } => {
            let picture = read_input(file.as_deref())?;
            let grid = picture.parse::<CellGrid>()?;
            Ok(format!("{}\n", codec::encode_grid(&grid)?))
        }
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn format_clues(clues: &GridClues) -> String {
    let mut out = String::new();
    for (title, lines) in [("rows", &clues.rows), ("columns", &clues.columns)] {
        out.push_str(&format!("{title}:\n"));
        for clue in lines {
            out.push_str(&format!("  {clue}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::{Args, CliError, Command, run};

    #[test]
    fn clues_lists_rows_then_columns() {
        let output = run(Command::Clues {
            text: "AwIN".to_owned(),
        })
        .unwrap();
        assert_eq!(output, "rows:\n  2\n  1\ncolumns:\n  1\n  2\n  0\n");
    }

    #[test]
    fn show_prints_picture() {
        let output = run(Command::Show {
            text: "AwIN".to_owned(),
        })
        .unwrap();
        assert_eq!(output, "##.\n.#.\n");
    }

    #[test]
    fn invalid_share_text_is_decode_error() {
        let err = run(Command::Show {
            text: "%%%".to_owned(),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Decode(_)));
    }

    #[test]
    fn encode_reads_picture_file() {
        let path = std::env::temp_dir().join(format!("nonopaint-cli-{}.txt", std::process::id()));
        std::fs::write(&path, "##.\n.#.\n").unwrap();

        let output = run(Command::Encode {
            file: Some(path.clone()),
        });
        std::fs::remove_file(&path).unwrap();

        assert_eq!(output.unwrap(), "AwIN\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = run(Command::Encode {
            file: Some("/nonexistent/nonopaint/picture.txt".into()),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["nonopaint-cli", "encode"]).unwrap();
        assert!(matches!(args.command, Command::Encode { file: None }));
        assert!(Args::try_parse_from(["nonopaint-cli", "clues"]).is_err());
    }
}
