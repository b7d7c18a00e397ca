mod app;
mod layout;
mod playlist;
mod util;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use tracing::info;

use app::{RenderConfig, Scene, SpringConfig, ViewerConfig, ZoomConfig};
use layout::{CircleLayout, ForceLayout, LayoutProvider};
use playlist::{DanglingEdgePolicy, load_graph};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LayoutKind {
    Force,
    Circle,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Graph document with `nodes` and `edges` arrays.
    #[arg(default_value = "spotify_playlist_graph.json")]
    graph: PathBuf,

    #[arg(long, value_enum, default_value_t = LayoutKind::Force)]
    layout: LayoutKind,

    #[arg(long, default_value_t = 800.0)]
    layout_scale: f32,

    #[arg(long, default_value_t = 240)]
    layout_iterations: usize,

    #[arg(long, default_value_t = 0.01)]
    spring_strength: f32,

    #[arg(long, default_value_t = 0.98)]
    damping: f32,

    #[arg(long, default_value_t = 2.0)]
    max_speed: f32,

    #[arg(long, default_value_t = 0.1)]
    zoom_step: f32,

    #[arg(long, default_value_t = 0.2)]
    min_zoom: f32,

    #[arg(long, default_value_t = 5.0)]
    max_zoom: f32,

    /// Target frame rate; the simulation advances one step per target frame.
    #[arg(long, default_value_t = 165.0)]
    fps: f32,

    #[arg(long, default_value_t = 12.0)]
    node_radius: f32,

    #[arg(long, default_value_t = 20)]
    label_chars: usize,

    /// Drop edges with unknown endpoints instead of refusing the document.
    #[arg(long)]
    skip_dangling_edges: bool,

    #[arg(long, default_value_t = 1400.0)]
    width: f32,

    #[arg(long, default_value_t = 900.0)]
    height: f32,
}

impl Args {
    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            spring: SpringConfig {
                spring_strength: self.spring_strength,
                damping: self.damping,
                max_speed: self.max_speed,
            },
            zoom: ZoomConfig {
                step: self.zoom_step,
                min: self.min_zoom,
                max: self.max_zoom,
            },
            render: RenderConfig {
                node_radius: self.node_radius,
                label_chars: self.label_chars,
                ..RenderConfig::default()
            },
            target_fps: self.fps,
        }
    }

    fn layout_provider(&self) -> Box<dyn LayoutProvider> {
        match self.layout {
            LayoutKind::Force => Box::new(ForceLayout {
                iterations: self.layout_iterations,
                scale: self.layout_scale,
            }),
            LayoutKind::Circle => Box::new(CircleLayout {
                scale: self.layout_scale,
            }),
        }
    }

    fn edge_policy(&self) -> DanglingEdgePolicy {
        if self.skip_dangling_edges {
            DanglingEdgePolicy::Skip
        } else {
            DanglingEdgePolicy::Reject
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = args
        .viewer_config()
        .validate()
        .context("invalid viewer configuration")?;
    let graph = load_graph(&args.graph, args.edge_policy())
        .with_context(|| format!("failed to load graph from {}", args.graph.display()))?;

    let provider = args.layout_provider();
    info!(
        layout = provider.name(),
        nodes = graph.node_count(),
        "computing initial layout"
    );
    let scene = Scene::from_layout(graph, provider.as_ref());

    let document = args.graph.display().to_string();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("playlist-graph")
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    eframe::run_native(
        "playlist-graph",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::GraphViewerApp::new(
                cc, scene, config, document,
            )))
        }),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}
