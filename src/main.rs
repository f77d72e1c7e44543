use anyhow::Context;
use clap::Parser;
use photomark::album::{Album, OpenPhoto};
use photomark::config::Config;
use photomark::draw::{FontMetrics, MonospaceMetrics, PangoMetrics};
use photomark::script::Script;
use std::cell::Cell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "photomark")]
#[command(version, about = "Annotate the back of your photos")]
struct Cli {
    /// PNG photo to open
    #[arg(long, short = 'p', value_name = "FILE")]
    photo: PathBuf,

    /// TOML event script replayed against the photo
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the visible side to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/photomark/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print each laid-out text line as "x y text"
    #[arg(long)]
    print_layout: bool,

    /// Measure text with a fixed advance per character instead of Pango
    #[arg(long, value_name = "PX")]
    char_width: Option<i32>,

    /// Line height used together with --char-width
    #[arg(long, value_name = "PX", default_value_t = 20)]
    line_height: i32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut album = Album::new(&config);
    let status = album.open(&cli.photo)?;
    log::info!("{status}");

    let photo = album.current_mut().context("no photo open")?;

    let repaints = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&repaints);
    photo
        .composer_mut()
        .set_repaint_hook(Box::new(move || counter.set(counter.get() + 1)));

    if let Some(path) = &cli.script {
        let script = Script::load(path)?;
        let mut clicks = config.click_counter();
        script
            .replay(photo.composer_mut(), &mut clicks)
            .with_context(|| format!("Failed to replay {}", path.display()))?;
        log::info!(
            "Replayed {} events ({} repaints), showing {:?} side",
            script.events.len(),
            repaints.get(),
            photo.composer().side()
        );
    }

    let metrics: Box<dyn FontMetrics> = match cli.char_width {
        Some(advance) => Box::new(MonospaceMetrics::new(advance, cli.line_height)),
        None => Box::new(PangoMetrics::new().context("Failed to create Pango layout")?),
    };

    if cli.print_layout {
        for line in photo.composer().layout(metrics.as_ref()) {
            println!("{} {} {}", line.x, line.y, line.text);
        }
    }

    if let Some(output) = &cli.output {
        write_png(photo, metrics.as_ref(), output)?;
        log::info!("Wrote {}", output.display());
    }

    Ok(())
}

fn write_png(photo: &OpenPhoto, metrics: &dyn FontMetrics, path: &Path) -> anyhow::Result<()> {
    let source = photo.surface();
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, source.width(), source.height())
        .context("Failed to create output surface")?;
    {
        let ctx = cairo::Context::new(&surface).context("Failed to create cairo context")?;
        photo.render(&ctx, metrics);
    }
    surface.flush();

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
