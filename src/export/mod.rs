//! # Export
//!
//! Renders the classified item list and the four-quadrant legend to a PNG
//! image artifact.
//!
//! This is the render/export collaborator of the core: it receives the
//! current items, classifies them from their committed scores (an export
//! triggered during an open edit shows committed values, never the draft),
//! and produces a poster-style image. It never mutates item state; any
//! failure is reported to the caller and leaves the session untouched.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod font;
mod raster;

use std::{fs, io::Cursor, path::Path};

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::{
    classify::{plot_position, Quadrant},
    constants::{
        EXPORT_HEIGHT, EXPORT_MATRIX_HEIGHT, EXPORT_PADDING, EXPORT_SUBTITLE, EXPORT_TITLE,
        EXPORT_WIDTH, UI_MARKER_NAME_TRUNCATE_LEN,
    },
    item::Item,
    ui,
};

use self::raster::{lighten, rgb, text_width, Canvas, Color};

const WHITE: Color = rgb(0xFF, 0xFF, 0xFF);
const BORDER: Color = rgb(0xD1, 0xD5, 0xDB);
const MUTED_TEXT: Color = rgb(0x66, 0x66, 0x66);
const DARK_TEXT: Color = rgb(0x1F, 0x29, 0x37);
const AXIS_TEXT: Color = rgb(0x37, 0x41, 0x51);

/// Footer line rendered under the legend.
const FOOTER: &str = "Built for PMs who believe in the power of visual communication.";

/// Left edge of the matrix frame (leaves room for the vertical axis label).
const MATRIX_LEFT: i64 = 40;

/// Top edge of the matrix frame (below title and subtitle).
const MATRIX_TOP: i64 = 100;

/// Top edge of the legend grid.
const LEGEND_TOP: i64 = 740;

/// How far quadrant backgrounds are washed toward white.
const TINT_AMOUNT: f32 = 0.88;

/// Renders the full export layout for the given items.
pub fn render(items: &[Item]) -> RgbaImage {
    let mut canvas = Canvas::new(EXPORT_WIDTH, EXPORT_HEIGHT, WHITE);
    let center_x = i64::from(EXPORT_WIDTH) / 2;

    canvas.text_centered(center_x, 24, EXPORT_TITLE, 3, DARK_TEXT);
    canvas.text_centered(center_x, 60, EXPORT_SUBTITLE, 2, MUTED_TEXT);

    draw_matrix(&mut canvas, items);
    draw_legend(&mut canvas);

    canvas.text_centered(
        center_x,
        i64::from(EXPORT_HEIGHT) - 40,
        FOOTER,
        1,
        MUTED_TEXT,
    );

    canvas.into_image()
}

/// Renders the items and writes the PNG artifact to `path`.
pub fn export(items: &[Item], path: &Path) -> Result<()> {
    write_png(render(items), path)
}

/// Encodes the image as PNG and writes it to disk.
pub fn write_png(image: RgbaImage, path: &Path) -> Result<()> {
    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut encoded, ImageFormat::Png)
        .context("Failed to encode PNG")?;

    fs::write(path, encoded.into_inner())
        .with_context(|| format!("Failed to write image: {}", path.display()))
}

fn quadrant_color(quadrant: Quadrant) -> Color {
    let (r, g, b) = quadrant.color();
    rgb(r, g, b)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn draw_matrix(canvas: &mut Canvas, items: &[Item]) {
    let width = i64::from(EXPORT_WIDTH) - MATRIX_LEFT - i64::from(EXPORT_PADDING);
    let height = i64::from(EXPORT_MATRIX_HEIGHT);
    let (half_w, half_h) = (width / 2, height / 2);

    // Quadrant background tints: impact up, effort right
    let cells = [
        (Quadrant::QuickWins, MATRIX_LEFT, MATRIX_TOP),
        (Quadrant::MajorProjects, MATRIX_LEFT + half_w, MATRIX_TOP),
        (Quadrant::FillIns, MATRIX_LEFT, MATRIX_TOP + half_h),
        (
            Quadrant::ThanklessTasks,
            MATRIX_LEFT + half_w,
            MATRIX_TOP + half_h,
        ),
    ];
    for (quadrant, x, y) in cells {
        canvas.fill_rect(x, y, half_w, half_h, lighten(quadrant_color(quadrant), TINT_AMOUNT));
    }

    // Frame and center grid lines
    canvas.stroke_rect(MATRIX_LEFT, MATRIX_TOP, width, height, 2, BORDER);
    canvas.vline(MATRIX_LEFT + half_w, MATRIX_TOP, height, BORDER);
    canvas.hline(MATRIX_LEFT, MATRIX_TOP + half_h, width, BORDER);

    draw_corner_captions(canvas, width, height);

    // Axis labels
    canvas.text_centered(
        MATRIX_LEFT + half_w,
        MATRIX_TOP + height + 12,
        "Effort \u{2192}",
        2,
        AXIS_TEXT,
    );
    canvas.text_vertical(12, MATRIX_TOP + half_h - 56, "\u{2191}Impact", 2, AXIS_TEXT);

    for item in items {
        let quadrant = Quadrant::classify(item.impact(), item.effort());
        let (x, y) = plot_position(item.impact(), item.effort());
        let cx = MATRIX_LEFT + (x * (width - 1) as f64) as i64;
        let cy = MATRIX_TOP + (y * (height - 1) as f64) as i64;

        canvas.fill_circle(cx, cy, 7, quadrant_color(quadrant));

        let name = ui::truncate(item.name(), UI_MARKER_NAME_TRUNCATE_LEN);
        let scores = format!("I:{} E:{}", item.impact(), item.effort());

        // Flip the caption to the marker's left when it would leave the frame
        let name_width = text_width(&name, 2);
        let caption_x = if cx + 12 + name_width > MATRIX_LEFT + width {
            cx - 12 - name_width
        } else {
            cx + 12
        };
        canvas.text(caption_x, cy - 10, &name, 2, DARK_TEXT);
        canvas.text(caption_x, cy + 8, &scores, 1, MUTED_TEXT);
    }
}

fn draw_corner_captions(canvas: &mut Canvas, width: i64, height: i64) {
    const INSET: i64 = 10;
    let label_height = raster::text_height(2);
    let summary_height = raster::text_height(1);

    for quadrant in Quadrant::ALL {
        let label = quadrant.label();
        let summary = quadrant.axis_summary();
        let color = quadrant_color(quadrant);

        let right = matches!(
            quadrant,
            Quadrant::MajorProjects | Quadrant::ThanklessTasks
        );
        let bottom = matches!(quadrant, Quadrant::FillIns | Quadrant::ThanklessTasks);

        let label_x = if right {
            MATRIX_LEFT + width - INSET - text_width(label, 2)
        } else {
            MATRIX_LEFT + INSET
        };
        let summary_x = if right {
            MATRIX_LEFT + width - INSET - text_width(summary, 1)
        } else {
            MATRIX_LEFT + INSET
        };
        let label_y = if bottom {
            MATRIX_TOP + height - INSET - summary_height - 4 - label_height
        } else {
            MATRIX_TOP + INSET
        };

        canvas.text(label_x, label_y, label, 2, color);
        canvas.text(
            summary_x,
            label_y + label_height + 4,
            summary,
            1,
            MUTED_TEXT,
        );
    }
}

#[allow(clippy::cast_possible_wrap)]
fn draw_legend(canvas: &mut Canvas) {
    const CELL_HEIGHT: i64 = 70;
    const GAP: i64 = 14;
    let pad = i64::from(EXPORT_PADDING);
    let cell_width = (i64::from(EXPORT_WIDTH) - pad * 2 - GAP) / 2;

    for (i, quadrant) in Quadrant::ALL.into_iter().enumerate() {
        let col = (i % 2) as i64;
        let row = (i / 2) as i64;
        let x = pad + col * (cell_width + GAP);
        let y = LEGEND_TOP + row * (CELL_HEIGHT + GAP);

        canvas.stroke_rect(x, y, cell_width, CELL_HEIGHT, 1, BORDER);
        canvas.fill_rect(x + 12, y + 16, 16, 16, quadrant_color(quadrant));
        canvas.text(x + 40, y + 14, quadrant.label(), 2, DARK_TEXT);
        canvas.text(x + 40, y + 38, quadrant.description(), 1, MUTED_TEXT);
    }
}
