use anyhow::{bail, ensure, Context, Result};
use std::io::{self, Write};

use warchest::{core::GameConfig, Engine, EngineOptions};

fn parse_depth(s: &str) -> Result<u32> {
    let depth: i64 = s
        .parse()
        .with_context(|| format!("invalid depth {:?}", s))?;
    ensure!(depth >= 0, "depth must be non-negative, got {}", depth);
    Ok(depth as u32)
}

fn read_depth() -> Result<u32> {
    print!("Enter desired ply depth: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    parse_depth(line.trim())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = GameConfig::default();
    let mut options = EngineOptions::default();
    let mut depth = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                options.seed = Some(args[i + 1].parse().context("invalid seed")?);
                i += 1;
            }
            "--gold" if i + 1 < args.len() => {
                let gold: i32 = args[i + 1].parse().context("invalid gold")?;
                ensure!(gold >= 0, "gold must be non-negative");
                config.starting_gold = gold;
                i += 1;
            }
            "--quiet" => options.trace = false,
            arg if !arg.starts_with("--") && depth.is_none() => {
                depth = Some(parse_depth(arg)?);
            }
            arg => bail!("invalid argument {}", arg),
        }
        i += 1;
    }

    let depth = match depth {
        Some(d) => d,
        None => read_depth()?,
    };

    let engine = Engine::new(config, options);
    let decision = engine.decide(depth)?;

    for candidate in &decision.candidates {
        println!("{} -> score {}", candidate.label, candidate.score);
    }
    println!("Decision: {} (score {})", decision.choice, decision.score);
    println!(
        "info nodes {} shops {}",
        decision.nodes, decision.shops_drawn
    );

    Ok(())
}
