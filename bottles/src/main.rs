use std::path::PathBuf;

use bottles_song::{Bottles, SongConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bottles=info,bottles_song=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut single_verse: Option<u32> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config_path = Some(path.into());
            }
            "--verse" => {
                let bottles = args.next().ok_or("--verse needs a bottle count")?;
                single_verse = Some(bottles.parse()?);
            }
            other => return Err(format!("unknown argument '{other}'").into()),
        }
    }

    let mut config = match &config_path {
        Some(path) => SongConfig::load(path)?,
        None => SongConfig::default(),
    };
    config.apply_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;

    let bottles = Bottles::new();
    let lyrics = match single_verse {
        Some(count) => bottles.verse(count)?,
        None => {
            tracing::info!(start = config.start, end = config.end, "singing");
            bottles.sing(&config)?
        }
    };
    print!("{lyrics}");

    Ok(())
}
