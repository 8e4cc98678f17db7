use std::{collections::BTreeMap, io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use folio_motion::{
    ContentTable, CssSink, Evaluator, FrameSample, Progress, ProgressSource,
    ProjectPage, SceneKind, ScrollSession, ScrollSessionOpts, SmoothingConfig, TrackedRegion,
    choreography::validate::check_choreography,
    content::projects::{SHOWCASE_CARDS, dangling_cards},
    render::css::css_style,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every module transform of a scene at one progress value.
    Sample(SampleArgs),
    /// Run a scroll session over a linear scroll sweep and print one JSON line per frame.
    Simulate(SimulateArgs),
    /// Validate every built-in scene and the showcase links.
    Check(CheckArgs),
    /// Print the case-study page for a project id.
    Project(ProjectArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Scene to evaluate.
    #[arg(long, default_value = "hero")]
    scene: SceneKind,

    /// Progress in [0, 1]; values outside are clamped.
    #[arg(long)]
    progress: f64,

    /// Print the evaluated frame as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Scene to drive.
    #[arg(long, default_value = "hero")]
    scene: SceneKind,

    /// Scroll offset at which progress is 0.
    #[arg(long)]
    start: f64,

    /// Scroll offset at which progress is 1.
    #[arg(long)]
    end: f64,

    /// First scroll offset of the sweep.
    #[arg(long)]
    from: f64,

    /// Last scroll offset of the sweep.
    #[arg(long)]
    to: f64,

    /// Number of frames; the sweep reaches `--to` on the last one.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Frame rate used as the elapsed time per frame.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    #[command(flatten)]
    smoothing: SmoothingArgs,
}

#[derive(Args, Debug)]
struct SmoothingArgs {
    /// Smoothing config JSON (`stiffness`, `damping`, `restDelta`).
    #[arg(long)]
    smoothing: Option<PathBuf>,

    /// Override the spring stiffness.
    #[arg(long)]
    stiffness: Option<f64>,

    /// Override the spring damping.
    #[arg(long)]
    damping: Option<f64>,

    /// Override the rest threshold.
    #[arg(long)]
    rest_delta: Option<f64>,

    /// Drive every track from raw progress.
    #[arg(long, conflicts_with_all = ["smoothing", "stiffness", "damping", "rest_delta"])]
    no_smoothing: bool,
}

impl SmoothingArgs {
    fn resolve(&self) -> anyhow::Result<Option<SmoothingConfig>> {
        if self.no_smoothing {
            return Ok(None);
        }
        let mut cfg = match &self.smoothing {
            Some(path) => SmoothingConfig::from_path(path)
                .with_context(|| format!("load smoothing config '{}'", path.display()))?,
            None => SmoothingConfig::default(),
        };
        if let Some(k) = self.stiffness {
            cfg.stiffness = k;
        }
        if let Some(c) = self.damping {
            cfg.damping = c;
        }
        if let Some(r) = self.rest_delta {
            cfg.rest_delta = r;
        }
        cfg.validate()?;
        Ok(Some(cfg))
    }
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Case-study JSON to check showcase links against (defaults to the built-in table).
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Project id from the `/project/<id>` route.
    id: String,

    /// Case-study JSON (defaults to the built-in table).
    #[arg(long)]
    content: Option<PathBuf>,

    /// Print the page as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct SimulatedFrame {
    frame: u32,
    scroll: f64,
    progress: Progress,
    smoothed: Progress,
    settled: bool,
    styles: BTreeMap<String, String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Check(args) => cmd_check(args),
        Command::Project(args) => cmd_project(args),
    }
}

fn load_content(path: Option<&PathBuf>) -> anyhow::Result<ContentTable> {
    match path {
        Some(p) => ContentTable::from_path(p)
            .with_context(|| format!("load case studies '{}'", p.display())),
        None => ContentTable::builtin().context("load built-in case studies"),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = args
        .scene
        .build()
        .with_context(|| format!("build scene '{}'", args.scene))?;
    let frame = Evaluator::eval_frame(&scene, FrameSample::direct(Progress::new(args.progress)));

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &frame).context("write frame JSON")?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{} @ {}", scene.name, frame.sample.smoothed.get())?;
    for m in &frame.modules {
        writeln!(out, "{:<20} {}", m.id, css_style(&m.transform))?;
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be at least 1");
    }
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be finite and > 0, got {}", args.fps);
    }
    let opts = ScrollSessionOpts {
        smoothing: args.smoothing.resolve()?,
        elide_unchanged: false,
    };
    let scene = args
        .scene
        .build()
        .with_context(|| format!("build scene '{}'", args.scene))?;
    let region = TrackedRegion::new(args.start, args.end)?;
    let mut source = ProgressSource::new(region);
    source.set_scroll(args.from);

    let mut session = ScrollSession::new(scene, source, opts)?;
    session.start()?;

    let dt = 1.0 / args.fps;
    let last = f64::from(args.frames.saturating_sub(1).max(1));
    let mut sink = CssSink::new();
    let mut out = std::io::stdout().lock();
    for i in 0..args.frames {
        let scroll = args.from + (args.to - args.from) * f64::from(i) / last;
        session.on_scroll(scroll);
        let outcome = session
            .frame(dt, &mut sink)
            .with_context(|| format!("simulate frame {i}"))?;
        let line = SimulatedFrame {
            frame: i,
            scroll,
            progress: outcome.progress,
            smoothed: outcome.smoothed,
            settled: outcome.settled,
            styles: sink.styles().clone(),
        };
        serde_json::to_writer(&mut out, &line).context("write frame JSON")?;
        writeln!(out)?;
    }
    session.stop();
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let mut failures = 0usize;
    for kind in SceneKind::ALL {
        let violations = match kind.build() {
            Ok(scene) => check_choreography(&scene),
            Err(e) => vec![e.to_string()],
        };
        if violations.is_empty() {
            println!("{kind}: ok");
        } else {
            failures += violations.len();
            println!("{kind}: {} violation(s)", violations.len());
            for v in &violations {
                println!("  - {v}");
            }
        }
    }

    let table = load_content(args.content.as_ref())?;
    let dangling = dangling_cards(&SHOWCASE_CARDS, &table);
    if dangling.is_empty() {
        println!("showcase: ok");
    } else {
        failures += dangling.len();
        println!("showcase: cards without a case study: {}", dangling.join(", "));
    }

    if failures > 0 {
        anyhow::bail!("{failures} problem(s) found");
    }
    Ok(())
}

fn cmd_project(args: ProjectArgs) -> anyhow::Result<()> {
    let table = load_content(args.content.as_ref())?;
    let page = table.page(Some(args.id.as_str()));

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &page).context("write page JSON")?;
        writeln!(out)?;
        return Ok(());
    }
    match page {
        ProjectPage::Found { study, next, .. } => {
            writeln!(out, "{}", study.title)?;
            writeln!(out, "category: {}", study.category)?;
            writeln!(out, "stack:    {}", study.tech_stack.join(", "))?;
            writeln!(out, "back:     {}", page.back_target())?;
            writeln!(out, "next:     {} ({})", next.title, next.target())?;
        }
        ProjectPage::NotFound => writeln!(out, "{}", page.headline())?,
    }
    Ok(())
}
