use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cellboard::{
    CellBoard, CellPainter, ComputeContext, PaintMode, Point, SvgExportOptions, board_to_svg,
    builtin_brush, builtin_brushes, svg_to_session,
};

#[derive(Parser, Debug)]
#[command(name = "cellboard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new board document.
    New(NewArgs),
    /// Advance a board document by N generations.
    Step(StepArgs),
    /// Inspect a board document.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Board width in cells.
    #[arg(long, default_value_t = 50)]
    width: u32,

    /// Board height in cells.
    #[arg(long, default_value_t = 25)]
    height: u32,

    /// Fill the board with radially biased noise instead of a pattern.
    #[arg(long, default_value_t = false)]
    randomize: bool,

    /// Built-in pattern to stamp at the board center.
    #[arg(long, default_value = "5-Jet")]
    pattern: String,

    /// Seed for the random fill (defaults to entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct StepArgs {
    /// Input board SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// How many generations to advance.
    #[arg(long, default_value_t = 1)]
    generations: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input board SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Dump the cells as ASCII art.
    #[arg(long, default_value_t = false)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::New(args) => cmd_new(args),
        Command::Step(args) => cmd_step(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    let mut board = CellBoard::with_size(ComputeContext::new(), args.width, args.height)?;
    let mut painter = match args.seed {
        Some(seed) => CellPainter::with_seed(&board, seed),
        None => CellPainter::new(&board),
    };

    if args.randomize {
        painter.randomize(&mut board)?;
    } else {
        let brush = builtin_brush(&args.pattern).with_context(|| {
            let known = builtin_brushes()
                .iter()
                .map(|b| b.name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            format!("unknown pattern '{}' (built-ins: {known})", args.pattern)
        })?;
        let center = Point::new(
            f64::from(board.width()) / 2.0,
            f64::from(board.height()) / 2.0,
        );
        painter.stamp_with(&mut board, &brush, center, PaintMode::Add)?;
    }

    write_svg(&board, &args.out)
}

fn cmd_step(args: StepArgs) -> anyhow::Result<()> {
    let (mut board, _painter) = load_board(&args.in_path)?;
    for _ in 0..args.generations {
        board.step()?;
    }
    write_svg(&board, &args.out)
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let (mut board, mut painter) = load_board(&args.in_path)?;
    let session = painter.session(&mut board)?;
    println!("width: {}", session.width);
    println!("height: {}", session.height);
    println!("population: {}", painter.buffer().population());

    if args.ascii {
        for y in 0..session.height {
            let row: String = (0..session.width)
                .map(|x| if painter.buffer().alive(x, y) { 'x' } else { '.' })
                .collect();
            println!("{row}");
        }
    }
    Ok(())
}

fn load_board(path: &PathBuf) -> anyhow::Result<(CellBoard, CellPainter)> {
    let svg = std::fs::read_to_string(path)
        .with_context(|| format!("read board document '{}'", path.display()))?;
    let session = svg_to_session(&svg)?;

    let mut board = CellBoard::new(ComputeContext::new())?;
    let mut painter = CellPainter::new(&board);
    painter.restore_session(&mut board, &session)?;
    Ok((board, painter))
}

fn write_svg(board: &CellBoard, out: &PathBuf) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let svg = board_to_svg(board, &SvgExportOptions::default())?;
    std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
