use {
  anyhow::{Context, Result},
  clap::{Parser, Subcommand},
  image::RgbaImage,
  itertools::Itertools,
  karl_thermometer::{
    config::Config,
    drawing::{self, Draw},
    progress::separator,
    renderer::{classify, DrawCommand},
    scene::milestones,
    session::Session,
    summary::Summary
  },
  std::path::PathBuf
};

#[derive(Parser, Debug)]
#[command(name = "karl-thermometer", version, about = "Fundraiser thermometer drawn as a caterpillar")]
struct Cli {
  /// TOML file with surface, palette, display and circle settings
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
  #[arg(short, long, global = true)]
  log_level: Option<String>,

  #[command(subcommand)]
  command: Command
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Draw the thermometer and export it as KarlThermometer.png
  Render {
    #[arg(long)]
    current: String,
    #[arg(long)]
    goal: String,
    /// Draw without the milestone grid
    #[arg(long)]
    hide_grid: bool,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf
  },
  /// Print how every circle is filled, without drawing
  Plan {
    #[arg(long)]
    current: String,
    #[arg(long)]
    goal: String
  },
  /// Print the horizontal extent of the figure and the milestone positions
  Bounds
}

fn setup_logging(level: Option<&str>) {
  let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
  if let Some(level) = level {
    builder.parse_filters(level);
  }
  builder.init();
}

/// Rejected amounts end the run without drawing; the user gets the form's notice.
fn submit(session: &mut Session, current: &str, goal: &str) -> Result<Summary> {
  session.submit(current, goal).map_err(|e| if e.is_user_error() {
    anyhow::Error::new(e).context("Please put in valid amounts. Nothing was drawn.")
  } else {
    e.into()
  })
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.log_level.as_deref());

  let config = match &cli.config {
    Some(path) => Config::load(path)
      .with_context(|| format!("failed to load configuration from {}", path.display()))?,
    None => Config::default()
  };
  let mut session = Session::new(&config).context("invalid configuration")?;

  match cli.command {
    Command::Render { current, goal, hide_grid, out_dir } => {
      let summary = submit(&mut session, &current, &goal)?;
      let scene = if hide_grid && session.grid_visible() { session.toggle_grid() } else { session.scene() };
      let mut image = RgbaImage::new(scene.width, scene.height);
      scene.draw(&mut image);
      let path = drawing::export(&image, &out_dir)
        .with_context(|| format!("failed to export into {}", out_dir.display()))?;
      println!("{summary}");
      println!("saved {}", path.display());
    }
    Command::Plan { current, goal } => {
      submit(&mut session, &current, &goal)?;
      let separator = separator(session.bounds(), session.progress());
      println!("separator at x = {separator}");
      for command in session.scene().commands {
        let circle = command.circle();
        let fill = match command {
          DrawCommand::Disc { fill, .. } => format!("{fill:?}"),
          DrawCommand::Arcs { start, end, .. } => format!("split, arcs meet at {start:.4} and {end:.4} rad")
        };
        println!(
          "({:>4}, {:>4}) r = {:>3}: {:?} -> {fill}",
          circle.center.x, circle.center.y, circle.r, classify(circle, separator)
        );
      }
    }
    Command::Bounds => {
      let bounds = session.bounds();
      println!("min = {}, max = {}", bounds.min, bounds.max);
      println!("milestones: {}", milestones(bounds).iter()
        .map(|m| format!("{}@{}", m.label(), m.position))
        .join(", "));
    }
  }
  Ok(())
}
