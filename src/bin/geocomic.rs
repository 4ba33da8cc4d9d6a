//! geocomic: render the xkcd geohashing comic for a date.
//!
//! Command-line mode writes a PNG file; `--cgi` emits a
//! `Content-Type: image/png` response on stdout, for use behind a
//! cgi-bin style web front end.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use geocomic::djia::{djia_date, HttpIndexSource, IndexQuote, IndexSource};
use geocomic::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render the xkcd geohashing comic for a date.
#[derive(Parser, Debug)]
#[command(name = "geocomic")]
#[command(version)]
#[command(about = "Render the xkcd geohashing comic for a date", long_about = None)]
struct Cli {
    /// Comic date: year
    #[arg(long, default_value_t = 2005)]
    year: i32,

    /// Comic date: month
    #[arg(long, default_value_t = 5)]
    month: u32,

    /// Comic date: day of month
    #[arg(long, default_value_t = 26)]
    day: u32,

    /// Dow Jones opening value; fetched over HTTP when omitted
    #[arg(long)]
    djia: Option<f64>,

    /// Reference latitude in degrees
    #[arg(long, default_value_t = 37.421542, allow_hyphen_values = true)]
    lat: f64,

    /// Reference longitude in degrees
    #[arg(long, default_value_t = -122.085589, allow_hyphen_values = true)]
    lon: f64,

    /// Directory holding the glyph assets and the template
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Template file name inside the assets directory
    #[arg(long, default_value = "geohashingclean.png")]
    template: String,

    /// Output PNG path
    #[arg(short, long, default_value = "comic.png")]
    out: PathBuf,

    /// Emit a CGI response (header + PNG bytes) on stdout instead
    #[arg(long)]
    cgi: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let date = NaiveDate::from_ymd_opt(cli.year, cli.month, cli.day).with_context(|| {
        format!(
            "{:04}-{:02}-{:02} is not a calendar date",
            cli.year, cli.month, cli.day
        )
    })?;

    let quote = match cli.djia {
        Some(value) => IndexQuote::Value(value),
        None => HttpIndexSource::default().resolve(djia_date(date, cli.lon))?,
    };
    let seed = SeedInput::from_date(date, quote.seed_value())?;
    let derived = derive(&seed);
    info!(digest = %derived.hex_digest, "derived geohash");

    let atlas = GlyphAtlas::load(&cli.assets)?;
    let template_path = cli.assets.join(&cli.template);
    let template_file = File::open(&template_path)
        .with_context(|| format!("cannot open template {}", template_path.display()))?;
    let template = Canvas::decode(BufReader::new(template_file))?;

    let base = BaseCoordinate {
        lat: cli.lat,
        lon: cli.lon,
    };
    let comic = Compositor::new(&atlas).render(template, &seed, &derived, base)?;

    if cli.cgi {
        CgiEmitter::write_response(&comic, io::stdout().lock())?;
    } else {
        PngEncoder::write_to_file(&comic, &cli.out)?;
        info!(path = %cli.out.display(), "wrote comic");
    }

    Ok(())
}
