//! Command-line front end: load or seed a store, then search for a path.

mod seed;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use trailgrid_core::GridPoint;
use trailgrid_paths::SearchMode;
use trailgrid_store::UserStore;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Only the user's own routes.
    Own,
    /// The user's routes plus those of everyone they follow.
    Feed,
}

impl From<Mode> for SearchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Own => SearchMode::OwnRoutes,
            Mode::Feed => SearchMode::Feed,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Find a path along previously recorded routes", long_about = None)]
struct Args {
    /// JSON store snapshot; a built-in sample store is used when omitted.
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// User whose routes (or feed) supply the walkable points.
    #[arg(short, long, default_value = "ann")]
    user: String,

    /// Start point as `x,y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from: GridPoint,

    /// End point as `x,y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: GridPoint,

    #[arg(short, long, value_enum, default_value_t = Mode::Own)]
    mode: Mode,

    /// Print the store as JSON before searching.
    #[arg(long)]
    dump_store: bool,
}

fn parse_point(s: &str) -> Result<GridPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(GridPoint::new(x, y))
}

fn load_store(path: Option<&PathBuf>) -> Result<UserStore, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            log::info!("loading store from {}", path.display());
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => {
            log::info!("using built-in sample store");
            seed::sample_store()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let store = load_store(args.store.as_ref())?;
    if args.dump_store {
        println!("{}", serde_json::to_string_pretty(&store)?);
    }

    let mode = SearchMode::from(args.mode);
    match store
        .path_finder()
        .find_path(&args.user, args.from, args.to, mode)
    {
        Ok(route) => {
            let points: Vec<String> = route.points().iter().map(ToString::to_string).collect();
            println!("{} ({} points): {}", route.name(), route.distance(), points.join(" -> "));
            Ok(())
        }
        Err(err) => {
            log::error!("search for '{}' failed: {err}", args.user);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("3,-4"), Ok(GridPoint::new(3, -4)));
        assert_eq!(parse_point(" 1 , 2 "), Ok(GridPoint::new(1, 2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn cli_shape() {
        let args = Args::try_parse_from([
            "trailgrid", "--from", "0,0", "--to", "-1,2", "-m", "feed",
        ])
        .unwrap();
        assert_eq!(args.user, "ann");
        assert_eq!(args.to, GridPoint::new(-1, 2));
        assert_eq!(SearchMode::from(args.mode), SearchMode::Feed);
    }
}
