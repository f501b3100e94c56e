use crate::commands::{encode::EncodeArgs, eval::EvalArgs, render::RenderArgs};

pub mod encode;
pub mod eval;
pub mod render;

/// Subcommands for nertag.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text lines into model input tensors (JSON lines).
    Encode(EncodeArgs),

    /// Decode model scores into labels, and render highlighted markup.
    Render(RenderArgs),

    /// Score a ``token gold predicted`` evaluation file.
    Eval(EvalArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::Eval(cmd) => cmd.run(),
        }
    }
}
