//! Build helpers: man pages and shell completions for `critter-match`.
//!
//! ```text
//! cargo run -p xtask -- man
//! cargo run -p xtask -- completions --shell zsh
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "critter-match development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Only this shell (default: all)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir, shell } => completions(&out_dir, shell),
    }
}

fn man(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = critter_match::command();
    let name = cmd.get_name().to_string();
    write_man(out_dir, &name, cmd.clone())?;

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let page = format!("{name}-{}", sub.get_name());
        write_man(out_dir, &page, sub.clone())?;
    }
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn write_man(out_dir: &Path, page: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buf)?;
    let path = out_dir.join(format!("{page}.1"));
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))
}

fn completions(out_dir: &Path, only: Option<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let shells: Vec<Shell> = match only {
        Some(shell) => vec![shell],
        None => Shell::value_variants().to_vec(),
    };
    let mut cmd = critter_match::command();
    let bin_name = cmd.get_name().to_string();

    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &bin_name, out_dir)?;
        if shell == Shell::Zsh {
            // A bare compdef errors when sourced before compinit.
            let script = fs::read_to_string(&path)?;
            let bare = format!("compdef _{0} {0}", bin_name);
            let guarded = format!("(( $+functions[compdef] )) && compdef _{0} {0}", bin_name);
            fs::write(&path, script.replace(&bare, &guarded))?;
        }
        println!("{}", path.display());
    }
    Ok(())
}
