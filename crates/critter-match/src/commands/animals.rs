//! Animals command: list the personality types.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use critter_match_core::animals::animal;
use critter_match_core::{ANIMALS, Dimension};

use crate::render;

/// Arguments for the `animals` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnimalsArgs {
    /// Show one animal in detail, by id (e.g. `fox`).
    pub id: Option<String>,
}

/// Print the animal catalog, or one animal's profile.
#[instrument(name = "cmd_animals", skip_all)]
pub fn cmd_animals(args: AnimalsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(id = ?args.id, "executing animals command");

    let Some(id) = args.id else {
        if global_json {
            println!("{}", serde_json::to_string_pretty(&ANIMALS)?);
        } else {
            for a in &ANIMALS {
                println!("{}", render::animal_row(a));
            }
        }
        return Ok(());
    };

    let Some(profile) = animal(&id) else {
        let known: Vec<&str> = ANIMALS.iter().map(|a| a.id).collect();
        anyhow::bail!("unknown animal '{id}' (known: {})", known.join(", "));
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!(
        "{} {}",
        profile.emoji,
        profile
            .name
            .if_supports_color(Stream::Stdout, |t| t.bold())
    );
    println!("{}", profile.description);
    println!();
    for d in Dimension::ALL {
        let score = profile.scores[d];
        println!(
            "  {} [{}] {}  {:.1}",
            d.low_label(),
            render::bar(profile.scores.position_percent(d), render::BAR_WIDTH),
            d.high_label(),
            score
        );
    }
    Ok(())
}
