#![warn(clippy::pedantic)]
//! Mad Libs: answer five prompts and hear the poem back.

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use rustyline::DefaultEditor;

use wander_engine::madlib::{PROMPTS, compose};
use wander_engine::style::GameStyle;

fn main() -> Result<()> {
    env_logger::init();
    let mut editor = DefaultEditor::new().context("starting line editor")?;

    println!("{}", "MAD LIBS".section_style());
    let mut words = Vec::with_capacity(PROMPTS.len());
    for prompt in PROMPTS {
        let answer = editor
            .readline(&format!("Enter {prompt}: ").prompt_style().to_string())
            .with_context(|| format!("reading {prompt}"))?;
        words.push(answer.trim().to_string());
    }
    info!("mad lib words: {words:?}");

    println!();
    for line in compose(&words)? {
        println!("{}", line.story_style().italic());
    }
    Ok(())
}
