// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context as _;
use clap::Parser;

use xo_core::GameField;
use xo_ui_egui::app::{preview_field, App};
use xo_view::ViewStyle;

#[derive(Parser)]
#[command(name = "xo-ui-egui")]
#[command(about = "Two-player grid tic-tac-toe", version)]
struct Args {
    /// Number of rows on the field
    #[arg(long, default_value = "5")]
    rows: usize,

    /// Number of columns on the field
    #[arg(long, default_value = "5")]
    columns: usize,

    /// JSON style file overriding the default colors and strokes
    #[arg(long)]
    style: Option<PathBuf>,

    /// Start from the sample field used in layout previews
    #[arg(long)]
    preview: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let style = match &args.style {
        Some(path) => ViewStyle::load_from_file(path)
            .with_context(|| format!("loading style from {}", path.display()))?,
        None => ViewStyle::default(),
    };

    let field = if args.preview {
        preview_field()?
    } else {
        GameField::new(args.rows, args.columns)?
    };
    tracing::info!(
        rows = field.rows(),
        columns = field.columns(),
        preview = args.preview,
        "starting xo"
    );

    let app = App::new(Rc::new(RefCell::new(field)), style);
    let window_size = app.initial_window_size();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window_size),
        centered: true,
        ..Default::default()
    };
    eframe::run_native("xo", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("failed to run eframe: {e}"))
}
