use std::path::PathBuf;
use std::process;

use chordgen::{catalog, describe_chord, ChordgenError, Section, SongPart, SongRequest};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chordgen")]
#[command(about = "Generate chord progressions with guitar voicings")]
#[command(version)]
struct Args {
    /// Root note (C, F#, Bb, ...)
    #[arg(short, long)]
    key: Option<String>,

    /// Scale (major, minor, dorian, harmonic-minor, blues, ...)
    #[arg(short, long)]
    scale: Option<String>,

    /// Genre (pop, rock, jazz, blues, edm, neo-soul, ...)
    #[arg(short, long)]
    genre: Option<String>,

    /// Seed for reproducible progressions
    #[arg(long)]
    seed: Option<u64>,

    /// YAML song request; other flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print this section (repeatable)
    #[arg(long = "section")]
    sections: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the selectable notes, scales, genres and sections
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so JSON/YAML on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ChordgenError> {
    if args.list {
        print_catalog(args.format)?;
        return Ok(());
    }

    let request = build_request(&args)?;
    tracing::debug!(?request, "song request");
    let song = request.generate();

    let whole_song = request.sections == SongPart::ALL;
    let sections: Vec<&Section> = request
        .sections
        .iter()
        .map(|&part| song.section(part))
        .collect();

    match args.format {
        Format::Json if whole_song => println!("{}", serde_json::to_string_pretty(&song)?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&sections)?),
        Format::Yaml if whole_song => {
            print!("{}", serde_yaml::to_string(&song)?)
        }
        Format::Yaml => print!("{}", serde_yaml::to_string(&sections)?),
        Format::Text => {
            println!("{} {} / {}", request.key, request.scale, request.genre);
            for section in sections {
                println!();
                print!("{}", render_section(section));
            }
        }
    }

    Ok(())
}

fn build_request(args: &Args) -> Result<SongRequest, ChordgenError> {
    let mut request = match &args.config {
        Some(path) => SongRequest::from_path(path)?,
        None => SongRequest::default(),
    };

    if let Some(key) = &args.key {
        request.key = key.parse()?;
    }
    if let Some(scale) = &args.scale {
        request.scale = scale.parse()?;
    }
    if let Some(genre) = &args.genre {
        request.genre = genre.parse()?;
    }
    if args.seed.is_some() {
        request.seed = args.seed;
    }
    if !args.sections.is_empty() {
        request.sections = args
            .sections
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<SongPart>, _>>()?;
    }

    Ok(request)
}

fn render_section(section: &Section) -> String {
    let mut out = format!("{}\n", section.title);
    for chord in &section.chords {
        let shapes: Vec<String> = chord.voicings.iter().map(|v| v.to_string()).collect();
        out.push_str(&format!(
            "  {:<7} {:<6} {:<20} {}\n",
            chord.name,
            chord.roman_numeral,
            describe_chord(&chord.name),
            shapes.join("  ")
        ));
    }
    out
}

fn print_catalog(format: Format) -> Result<(), ChordgenError> {
    let catalog = catalog();
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(&catalog)?),
        Format::Text => {
            println!("Notes:    {}", catalog.notes.join(", "));
            println!("Scales:   {}", catalog.scales.join(", "));
            println!("Genres:   {}", catalog.genres.join(", "));
            println!("Sections: {}", catalog.sections.join(", "));
        }
    }
    Ok(())
}
