use std::io::{BufRead, Write};

use nertag::eval::{evaluate, read_eval_file};

use crate::input_output::{InputArgs, OutputArgs};

/// Args for the eval command.
#[derive(clap::Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Write the report as JSON.
    #[arg(long)]
    json: bool,
}

impl EvalArgs {
    /// Run the eval command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_eval(&mut reader, &mut writer, self.json)
    }
}

fn run_eval(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sentences = read_eval_file(reader)?;
    log::info!("evaluating {} sentences", sentences.len());

    let report = evaluate(&sentences)?;
    if json {
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{report}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const FILE: &str = "EU B-ORG B-ORG\nrejects O O\nGerman B-MISC B-PER\n\nPeter B-PER B-PER\n";

    #[test]
    fn test_run_eval_text() {
        let mut out = Vec::new();
        run_eval(&mut Cursor::new(FILE), &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("processed 4 tokens with 3 phrases; found: 3 phrases; correct: 2.\n"));
        assert!(text.contains("ORG: precision: 100.00%"));
    }

    #[test]
    fn test_run_eval_json() {
        let mut out = Vec::new();
        run_eval(&mut Cursor::new(FILE), &mut out, true).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(report["token_count"], 4);
        assert_eq!(report["counts"]["correct"], 2);
        assert_eq!(report["by_type"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_run_eval_bad_line() {
        let mut out = Vec::new();
        assert!(run_eval(&mut Cursor::new("EU B-ORG\n"), &mut out, false).is_err());
    }
}
