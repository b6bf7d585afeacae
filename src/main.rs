//! Brewsheet
//!
//! Renders a BeerXML recipe document as text tables or JSON on stdout.

use std::fs;

use tracing_subscriber::EnvFilter;

use brewsheet::render::{render, RenderConfig, RenderOutcome, RenderedRecipe};

fn print_usage() {
    eprintln!("Usage: brewsheet [OPTIONS] <FILE>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --metric         Display metric values instead of U.S. values");
    eprintln!("  --json           Emit the rendered sections as JSON");
    eprintln!("  --no-style       Skip the style table");
    eprintln!("  --no-download    Skip the download link section");
    eprintln!("  --url <URL>      Source URL for the download link");
    eprintln!("  --version        Print version information");
}

fn print_text(rendered: &RenderedRecipe) {
    for section in &rendered.sections {
        println!("{}", section.heading);

        if section.columns.is_empty() {
            for row in &section.rows {
                for (_, value) in row.iter() {
                    println!("  {}", value);
                }
            }
        } else {
            let mut widths: Vec<usize> = section
                .columns
                .iter()
                .map(|c| c.chars().count())
                .collect();
            for row in &section.rows {
                for (i, column) in section.columns.iter().enumerate() {
                    if let Some(value) = row.get(column) {
                        widths[i] = widths[i].max(value.chars().count());
                    }
                }
            }

            let header: Vec<String> = section
                .columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| format!("{:<1$}", column, width))
                .collect();
            println!("  {}", header.join("  ").trim_end());

            for row in &section.rows {
                let cells: Vec<String> = section
                    .columns
                    .iter()
                    .zip(&widths)
                    .map(|(column, &width)| format!("{:<1$}", row.get(column).unwrap_or(""), width))
                    .collect();
                println!("  {}", cells.join("  ").trim_end());
            }
        }

        if let Some(link) = &section.link {
            println!("  {}", link);
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr so stdout stays clean for the output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("brewsheet=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut config = RenderConfig::default();
    let mut json = false;
    let mut input: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--metric" => config.use_metric = true,
            "--json" => json = true,
            "--no-style" => config.include_style = false,
            "--no-download" => config.include_download_link = false,
            "--url" => {
                let Some(url) = args.next() else {
                    eprintln!("--url requires a value");
                    std::process::exit(2);
                };
                config.source_url = Some(url);
            }
            "--version" => {
                println!("{}", brewsheet::build_info::banner());
                return Ok(());
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => input = Some(arg),
        }
    }

    let Some(path) = input else {
        print_usage();
        std::process::exit(2);
    };

    let text = fs::read_to_string(&path)?;
    match render(&text, &config)? {
        RenderOutcome::Rendered(rendered) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                print_text(&rendered);
            }
        }
        RenderOutcome::NoRecipeFound => {
            eprintln!("No recipe found in {}", path);
            std::process::exit(1);
        }
    }

    Ok(())
}
