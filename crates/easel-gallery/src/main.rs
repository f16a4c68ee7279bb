//! Headless widget gallery.
//!
//! Drives a small panel and a file dialog through a scripted pointer and
//! keyboard session, rendering every frame to `target/gallery/` as PNG.
//! Useful for eyeballing widget styling without wiring up a real window.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use easel_core::logging::{init_logging, LoggingConfig};
use easel_ui::prelude::*;

const SURFACE_W: u32 = 760;
const SURFACE_H: u32 = 600;
const DIALOG_POS: Vec2 = Vec2 { x: 220.0, y: 40.0 };

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out_dir = PathBuf::from("target/gallery");
    fs::create_dir_all(&out_dir).context("creating output directory")?;
    let sample_dir = prepare_samples(&out_dir)?;

    let (fonts, font) = FontStore::with_builtin();

    // Static chrome goes through `Element` to keep one update/draw loop.
    let mut chrome: Vec<Element> = vec![
        Label::new(Vec2::new(20.0, 40.0), "easel gallery", font)
            .font_size(23.0)
            .into(),
        Label::new(Vec2::new(20.0, 290.0), "theme", font)
            .font_size(15.0)
            .into(),
    ];

    let mut name = TextInput::new(Vec2::new(110.0, 90.0), 180.0, font);
    let mut open = Button::new(Rect::new(20.0, 120.0, 100.0, 26.0), font).text("Open...");
    let mut volume = Slider::new(Vec2::new(20.0, 200.0), "volume", font).font_size(15.0);
    volume.set_value(40);
    let mut theme = ToggleGroup::new();
    theme.push(
        ToggleButton::new(Rect::new(20.0, 310.0, 80.0, 26.0), font).text("Light"),
    );
    theme.push(
        ToggleButton::new(Rect::new(110.0, 310.0, 80.0, 26.0), font).text("Dark"),
    );
    theme.set_selected(Some(0));

    let mut dialog: Option<FileDialog> = None;
    let mut input = InputState::new();

    for (frame, (pointer, pressed, key)) in script().into_iter().enumerate() {
        let mut ctx = input.begin_frame(pointer, pressed, key);

        // Dialog first: it sits on top, so it wins the pointer claim.
        if let Some(dlg) = dialog.as_mut() {
            dlg.update(&mut ctx);
            if dlg.is_closed() {
                info!("dialog finished: {}", dlg.result());
                dialog = None;
            }
        }
        for el in chrome.iter_mut() {
            el.update(&mut ctx);
        }
        name.update(&mut ctx);
        open.update(&mut ctx);
        volume.update(&mut ctx);
        theme.update(&mut ctx);

        if open.was_pressed() && dialog.is_none() {
            let dlg = FileDialog::new(
                Vec2::new(520.0, 520.0),
                DIALOG_POS,
                &sample_dir,
                "open",
                font,
                &StdFs::new(),
            )?;
            dialog = Some(dlg);
        }

        let background = if theme.selected() == Some(1) {
            Color::rgb(0x24, 0x26, 0x2b)
        } else {
            Color::rgb(0xe9, 0xe9, 0xec)
        };
        let mut surface = Pixmap::filled(SURFACE_W, SURFACE_H, background);
        let mut painter = Painter::new(&mut surface, &fonts);
        for el in &chrome {
            el.draw(&mut painter);
        }
        name.draw(&mut painter);
        open.draw(&mut painter);
        volume.draw(&mut painter);
        theme.draw(&mut painter);
        if let Some(dlg) = &dialog {
            dlg.draw(&mut painter);
        }

        let path = out_dir.join(format!("frame-{frame:02}.png"));
        save_png(&surface, &path)?;
    }

    info!(
        "done: name={:?} volume={} theme={:?}",
        name.current_text(),
        volume.value(),
        theme.selected()
    );
    info!("frames written to {}", out_dir.display());
    Ok(())
}

/// One tuple per frame: pointer position, primary button, key event.
fn script() -> Vec<(Vec2, bool, Option<KeyEvent>)> {
    let idle = Vec2::new(400.0, 580.0);
    let field = Vec2::new(110.0, 90.0);
    let open = Vec2::new(70.0, 133.0);
    let tile = DIALOG_POS + Vec2::new(90.0, 100.0);
    let slider_mid = Vec2::new(105.0, 200.0);
    let slider_high = Vec2::new(156.0, 200.0);
    let ok = DIALOG_POS + Vec2::new(360.0, 495.0);
    let dark = Vec2::new(150.0, 323.0);

    let mut frames = vec![
        (idle, false, None),
        // Type a name into the panel field.
        (field, true, None),
        (field, false, None),
    ];
    for ch in "demo".chars() {
        frames.push((idle, false, Some(KeyEvent::character(ch))));
    }
    frames.extend([
        (idle, false, Some(KeyEvent::new(Key::Enter))),
        // Open the file dialog.
        (open, false, None),
        (open, true, None),
        (open, false, None),
        // Select the first sample tile.
        (tile, false, None),
        (tile, true, None),
        (tile, false, None),
        // Drag the slider while the dialog is up; the claim keeps the
        // two interactions apart.
        (slider_mid, true, None),
        (slider_high, true, None),
        (slider_high, false, None),
        // Confirm the dialog.
        (ok, true, None),
        (ok, false, None),
        // Switch the theme.
        (dark, true, None),
        (dark, false, None),
        (idle, false, None),
    ]);
    frames
}

/// Writes a few small images and a text file for the dialog to list.
fn prepare_samples(root: &Path) -> Result<PathBuf> {
    let dir = root.join("samples");
    fs::create_dir_all(&dir).context("creating sample directory")?;

    let tints: [(&str, [u32; 3]); 3] = [
        ("moss.png", [64, 160, 64]),
        ("ocean.png", [32, 128, 255]),
        ("sunset.png", [255, 96, 32]),
    ];
    for (file_name, tint) in tints {
        let img = image::RgbaImage::from_fn(64, 64, move |x, y| {
            let fade = 255 - (x + y) * 2;
            image::Rgba([
                (tint[0] * fade / 255) as u8,
                (tint[1] * fade / 255) as u8,
                (tint[2] * fade / 255) as u8,
                255,
            ])
        });
        let path = dir.join(file_name);
        img.save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    fs::write(dir.join("readme.txt"), "sample files for the gallery demo\n")
        .context("writing readme")?;
    Ok(dir)
}

fn save_png(surface: &Pixmap, path: &Path) -> Result<()> {
    image::RgbaImage::from_raw(surface.width(), surface.height(), surface.data().to_vec())
        .context("frame buffer size mismatch")?
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
