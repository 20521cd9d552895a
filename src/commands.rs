//! Text rendering of session views and outcomes.
//!
//! Gameplay errors are reported, never propagated: a failed craft or purchase
//! prints a notice and leaves the process exit code alone.

use anyhow::Result;
use elemcraft_core::emoji_for;
use elemcraft_game::{rarity_of, CraftOutcome, KeyValueStore, Persistence, Session};
use elemcraft_testkit::short_digest;
use std::path::Path;

use crate::config::GameConfig;

pub fn info<S: KeyValueStore>(session: &Session<S>) -> Result<()> {
    let universe = session.universe();
    let stats = universe.stats();
    let progress = session.progress();

    println!("seed        {}", universe.seed());
    println!("digest      {}", short_digest(&**universe)?);
    println!("elements    {}", universe.elements().len());
    println!(
        "recipes     {} ({} bulk, {}/{} attempts)",
        universe.recipes().len(),
        stats.products,
        stats.attempts,
        stats.attempt_budget
    );
    println!("user        {}", session.user_id());
    println!(
        "discovered  {}/{} ({}%)",
        progress.discovered, progress.total, progress.percent
    );
    println!("inventory   {}", session.state().inventory().len());
    println!("coins       {}", session.state().coins());
    if session.persistence() == Persistence::Unavailable {
        println!("(progress is not being saved)");
    }
    Ok(())
}

pub fn inventory<S: KeyValueStore>(session: &Session<S>, filter: &str) {
    let universe = session.universe();
    for name in session.state().inventory_matching(filter) {
        let category = universe
            .element(name)
            .map(|e| e.category.as_str())
            .unwrap_or("");
        println!("{} {name:<28} {category}", emoji_for(name));
    }
}

pub fn craft<S: KeyValueStore>(session: &mut Session<S>, a: &str, b: &str) {
    match session.craft(a, b) {
        Ok(CraftOutcome::Discovered { name, reward }) => {
            println!(
                "{} {name} ({}) - new discovery! +{reward} coins",
                emoji_for(&name),
                rarity_of(&name)
            );
        }
        Ok(CraftOutcome::Repeated { name }) => {
            println!(
                "{} {name} ({}) - crafted (already discovered)",
                emoji_for(&name),
                rarity_of(&name)
            );
        }
        Err(err) => println!("{err}"),
    }
}

pub fn shop<S: KeyValueStore>(session: &Session<S>) {
    println!("coins: {}", session.state().coins());
    for listing in session.shop() {
        let marker = if listing.affordable { " " } else { "x" };
        println!(
            "{marker} {} {:<28} {:<10} {:>4}c",
            listing.emoji, listing.name, listing.rarity, listing.price
        );
    }
}

pub fn buy<S: KeyValueStore>(session: &mut Session<S>, name: &str) {
    match session.buy(name) {
        Ok(receipt) if receipt.discovered => println!(
            "bought & discovered {} for {}c (+{} bonus)",
            receipt.name, receipt.price, receipt.bonus
        ),
        Ok(receipt) => println!("bought {} for {}c", receipt.name, receipt.price),
        Err(err) => println!("{err}"),
    }
}

pub fn gallery<S: KeyValueStore>(session: &Session<S>, filter: &str) {
    for entry in session.gallery(filter) {
        let status = if entry.unlocked { "Unlocked" } else { "Locked" };
        println!(
            "{} {:<28} {:<10} {:<9} {:>7.3}% {status}",
            entry.emoji, entry.name, entry.rarity, entry.category, entry.drop_percent
        );
    }
}

pub fn reset<S: KeyValueStore>(session: &mut Session<S>, confirmed: bool) {
    if !confirmed {
        println!("reset discards all progress; rerun with --yes to confirm");
        return;
    }
    session.reset();
    println!("reset done");
}

pub fn show_config(config: &GameConfig, write_to: Option<&Path>) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    if let Some(path) = write_to {
        config.save_to_path(path)?;
        println!("# written to {}", path.display());
    }
    Ok(())
}
