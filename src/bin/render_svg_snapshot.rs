use std::fs;
use std::path::PathBuf;

use focus_chart::api::{ChartConfig, ChartEngine};
use focus_chart::core::IngestOptions;
use focus_chart::render::SvgRenderer;
use focus_chart::telemetry;

const USAGE: &str = "Usage: cargo run --bin render_svg_snapshot -- --data <csv> --out-dir <dir> \
[--width <px>] [--config <json>] [--select <x0> <x1>] [--pin <name>]...";

#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    out_dir: PathBuf,
    container_width: Option<f64>,
    config_path: Option<PathBuf>,
    select: Option<(f64, f64)>,
    pins: Vec<String>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };
    if let Some(width) = args.container_width {
        config = config.with_container_width(width);
    }

    let mut engine = ChartEngine::from_csv_path(
        SvgRenderer::new(),
        &args.data_path,
        &IngestOptions::default(),
        config,
    )
    .map_err(|err| format!("failed to load `{}`: {err}", args.data_path.display()))?;

    if let Some(extent) = args.select {
        engine
            .on_selection_change(Some(extent))
            .map_err(|err| err.to_string())?;
    }
    for name in &args.pins {
        engine.click(name).map_err(|err| err.to_string())?;
    }

    let snapshot = engine.snapshot_json_pretty().map_err(|err| err.to_string())?;
    let renderer = engine.into_renderer();

    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", args.out_dir.display()))?;
    for (file_name, contents) in [
        ("focus.svg", renderer.focus_svg()),
        ("context.svg", renderer.context_svg()),
        ("snapshot.json", snapshot.as_str()),
    ] {
        let path = args.out_dir.join(file_name);
        fs::write(&path, contents)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }

    println!(
        "wrote focus.svg, context.svg and snapshot.json to {} ({} render passes)",
        args.out_dir.display(),
        renderer.render_count()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut container_width: Option<f64> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut select: Option<(f64, f64)> = None;
    let mut pins = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--out-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out-dir".to_owned())?;
                out_dir = Some(PathBuf::from(value));
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                container_width = Some(parse_number("--width", &value)?);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--select" => {
                let x0 = args
                    .next()
                    .ok_or_else(|| "missing values for --select".to_owned())?;
                let x1 = args
                    .next()
                    .ok_or_else(|| "missing second value for --select".to_owned())?;
                select = Some((parse_number("--select", &x0)?, parse_number("--select", &x1)?));
            }
            "--pin" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --pin".to_owned())?;
                pins.push(value);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        data_path: data_path.ok_or_else(|| format!("--data is required\n{USAGE}"))?,
        out_dir: out_dir.ok_or_else(|| format!("--out-dir is required\n{USAGE}"))?,
        container_width,
        config_path,
        select,
        pins,
    })
}

fn parse_number(flag: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid number `{value}` for {flag}: {err}"))
}
