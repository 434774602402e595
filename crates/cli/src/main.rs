use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::prelude::*;

mod provenance;

#[derive(Parser)]
#[command(name = "trigon", version)]
#[command(about = "Triangle sides, angles, area and classification")]
struct Cmd {
    /// Label locale for the text report (en, sv)
    #[arg(long, global = true, env = "TRIGON_LOCALE", default_value = "en")]
    locale: Locale,

    /// Print JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    /// Also write the JSON document to PATH, with a provenance sidecar
    #[arg(long, global = true, value_name = "PATH")]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug, Clone)]
enum Action {
    /// Right triangle from its two legs
    #[command(allow_negative_numbers = true)]
    Legs {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },
    /// Triangle from three side lengths
    #[command(allow_negative_numbers = true)]
    Sides { a: f64, b: f64, c: f64 },
    /// Triangle from three vertices in the plane
    #[command(allow_negative_numbers = true)]
    Vertices {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
    /// Reproducible random triangles
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Legs { .. } => "legs",
            Action::Sides { .. } => "sides",
            Action::Vertices { .. } => "vertices",
            Action::Random { .. } => "random",
        }
    }

    fn params(&self) -> serde_json::Value {
        match *self {
            Action::Legs { width, height } => {
                serde_json::json!({ "width": width, "height": height })
            }
            Action::Sides { a, b, c } => serde_json::json!({ "sides": [a, b, c] }),
            Action::Vertices {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => serde_json::json!({ "vertices": [[x1, y1], [x2, y2], [x3, y3]] }),
            Action::Random { seed, index, count } => {
                serde_json::json!({ "seed": seed, "index": index, "count": count })
            }
        }
    }
}

/// JSON view of one triangle. NaN values serialize as `null`.
#[derive(Serialize, Debug)]
struct TriangleDoc {
    sides: [f64; 3],
    angles: [f64; 3],
    area: f64,
    perimeter: f64,
    kind: &'static str,
    label: String,
    satisfies_triangle_inequality: bool,
}

impl TriangleDoc {
    fn new(t: &Triangle, labels: &impl Labels) -> Self {
        Self {
            sides: t.sides(),
            angles: t.angles(),
            area: t.area(),
            perimeter: t.perimeter(),
            kind: t.triangle_type().key(),
            label: labels.kind(t.triangle_type()).into_owned(),
            satisfies_triangle_inequality: t.satisfies_triangle_inequality(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(&cmd)
}

fn run(cmd: &Cmd) -> Result<()> {
    tracing::info!(action = cmd.action.name(), locale = %cmd.locale, "run");
    let triangles = build(&cmd.action)?;
    for t in &triangles {
        if !t.satisfies_triangle_inequality() {
            tracing::warn!(
                sides = ?t.sides(),
                "sides violate the triangle inequality; angles and area are NaN"
            );
        }
    }

    let labels = Catalog::builtin(cmd.locale);
    let docs: Vec<TriangleDoc> = triangles
        .iter()
        .map(|t| TriangleDoc::new(t, &labels))
        .collect();

    if let Some(out) = &cmd.out {
        write_output(out, &docs, &cmd.action)?;
    }
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&docs)?);
    } else {
        let text: Vec<String> = triangles
            .iter()
            .map(|t| Report::new(t).render(&labels))
            .collect();
        println!("{}", text.join("\n\n"));
    }
    Ok(())
}

fn build(action: &Action) -> Result<Vec<Triangle>> {
    let t = match *action {
        Action::Legs { width, height } => Triangle::from_legs(width, height)
            .with_context(|| format!("legs width={width} height={height}"))?,
        Action::Sides { a, b, c } => {
            Triangle::from_sides(a, b, c).with_context(|| format!("sides {a} {b} {c}"))?
        }
        Action::Vertices {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        } => Triangle::from_vertices(Vec2::new(x1, y1), Vec2::new(x2, y2), Vec2::new(x3, y3))
            .context("vertices give a zero-length side")?,
        Action::Random { seed, index, count } => {
            let cfg = SampleCfg::default();
            return (index..index.saturating_add(count))
                .map(|i| {
                    draw_triangle(cfg, ReplayToken::new(seed, i))
                        .with_context(|| format!("random seed={seed} index={i}"))
                })
                .collect();
        }
    };
    tracing::debug!(sides = ?t.sides(), kind = %t.triangle_type(), "built");
    Ok(vec![t])
}

fn write_output(out: &Path, docs: &[TriangleDoc], action: &Action) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(docs)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(action.name(), action.params());
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}
