//! Static Page Demo
//!
//! Prints the filter declarations and the chalked element attributes in
//! both modes.
//!
//! Run with:
//! `cargo run -p chalkboard_app --example static_page -- [config.toml]`

use anyhow::Context;
use chalkboard_app::content::showcase_elements;
use chalkboard_app::prelude::*;
use chalkboard_filters::svg;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => AppConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let showcase = Showcase::new(&config)?;
    let _sub = showcase.subscribe(|mode| tracing::info!("Mode changed to {mode}"));

    println!("{}", showcase.filter_defs());
    println!("body::before {{ {} }}\n", svg::page_grain_css());

    let elements = showcase_elements();
    for _ in Mode::ALL {
        let mode = showcase.mode();
        let mut vars: Vec<_> = showcase.css_variables().into_iter().collect();
        vars.sort();

        println!("<!-- {mode} -->");
        let declarations: Vec<_> = vars.iter().map(|(k, v)| format!("--{k}: {v};")).collect();
        println!(":root {{ {} }}", declarations.join(" "));
        for element in &elements {
            println!("{:<40} {}", element.name, showcase.style(element)?);
        }
        println!();

        showcase.toggle_mode();
    }

    Ok(())
}
