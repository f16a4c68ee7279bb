//! Draggable open/save file picker assembled from the widget set.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use easel_core::coords::{Rect, Vec2};
use easel_core::paint::Color;
use easel_core::surface::Pixmap;
use easel_core::text::FontId;

use crate::error::DialogError;
use crate::fs::FileSource;
use crate::input::InputCtx;
use crate::painter::Painter;
use crate::style::{ButtonStyle, FaceStyle, ToggleStyle};
use crate::widget::Widget;
use crate::widgets::button::Button;
use crate::widgets::label::Label;
use crate::widgets::scrollbar::ScrollBar;
use crate::widgets::text_input::TextInput;
use crate::widgets::toggle::{ToggleButton, ToggleGroup};

const TITLE_BAR_H: f32 = 30.0;
const BOTTOM_BAR_H: f32 = 90.0;
const SCROLLBAR_W: f32 = 20.0;
const COLUMNS: usize = 3;
const TILE_W: f32 = 140.0;
const TILE_H: f32 = 160.0;
const TILE_STRIDE_X: f32 = 160.0;
const TILE_STRIDE_Y: f32 = 180.0;
const GRID_MARGIN: f32 = 20.0;
const PREVIEW_SIDE: f32 = 120.0;

/// Characters that never belong in a file name.
const INVALID_NAME_CHARS: [char; 9] = ['\\', '/', '|', ':', '*', '<', '>', '?', '"'];

/// What a [`FileDialog`] is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Open,
    Save,
}

impl DialogMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Save => "save",
        }
    }

    fn title(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for DialogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogMode {
    type Err = DialogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "save" => Ok(Self::Save),
            other => Err(DialogError::InvalidMode(other.to_string())),
        }
    }
}

/// How a closed dialog ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// OK with this file name (possibly empty).
    Confirmed(String),
    /// Cancel button or the title-bar close.
    Cancelled,
}

/// A modal file picker.
///
/// Lists a directory as a scrollable grid of tiles with image previews,
/// a name field, OK and CANCEL. The window drags by its title bar. The
/// host keeps updating and drawing it until [`FileDialog::is_closed`],
/// then reads [`FileDialog::outcome`] or the encoded [`FileDialog::result`].
///
/// Selecting a tile mirrors its stem into the name field every frame, so
/// the selection always wins over hand-typed text until it is cleared.
pub struct FileDialog {
    position: Vec2,
    size: Vec2,
    mode: DialogMode,
    font: FontId,
    close: Button,
    drag: Option<Vec2>,
    names: Vec<String>,
    tiles: ToggleGroup,
    content: RefCell<Pixmap>,
    scrollbar: ScrollBar,
    name_label: Label,
    field: TextInput,
    ok: Button,
    cancel: Button,
    outcome: Option<DialogOutcome>,
}

impl fmt::Debug for FileDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDialog")
            .field("position", &self.position)
            .field("size", &self.size)
            .field("mode", &self.mode)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl FileDialog {
    /// Builds a dialog of `size` pixels with its top-left at `position`,
    /// listing `dir` through `source`. `mode` must be `"open"` or
    /// `"save"`.
    pub fn new(
        size: Vec2,
        position: Vec2,
        dir: &Path,
        mode: &str,
        font: FontId,
        source: &dyn FileSource,
    ) -> Result<Self, DialogError> {
        let mode: DialogMode = mode.parse()?;
        let names = source.entries(dir)?;
        debug!(
            "{mode} dialog over {}: {} entries",
            dir.display(),
            names.len()
        );

        let visible = size.y - TITLE_BAR_H - BOTTOM_BAR_H;
        let content_w = size.x - SCROLLBAR_W;
        let content_h = if names.is_empty() {
            visible
        } else {
            let rows_below = ((names.len() - 1) / COLUMNS) as f32;
            visible.max(TILE_H + 2.0 * GRID_MARGIN + rows_below * TILE_STRIDE_Y)
        };

        let mut tiles = ToggleGroup::new();
        for (i, name) in names.iter().enumerate() {
            let rect = Rect::new(
                GRID_MARGIN + (i % COLUMNS) as f32 * TILE_STRIDE_X,
                GRID_MARGIN + (i / COLUMNS) as f32 * TILE_STRIDE_Y,
                TILE_W,
                TILE_H,
            );
            let preview = if has_image_ext(name) {
                source
                    .thumbnail(&dir.join(name), Vec2::splat(PREVIEW_SIDE))
                    .unwrap_or_else(|| {
                        debug!("placeholder preview for {name}");
                        placeholder_preview()
                    })
            } else {
                placeholder_preview()
            };
            tiles.push(
                ToggleButton::new(rect, font)
                    .text(stem(name))
                    .font_size(17.0)
                    .icon(preview)
                    .style(tile_style()),
            );
        }

        let bottom_mid = size.y - BOTTOM_BAR_H + 30.0;
        Ok(Self {
            position,
            size,
            mode,
            font,
            close: Button::new(Rect::new(size.x - 40.0, 0.0, 40.0, TITLE_BAR_H), font)
                .text("X")
                .font_size(20.0)
                .style(close_style()),
            drag: None,
            tiles,
            content: RefCell::new(Pixmap::filled(
                content_w as u32,
                content_h as u32,
                Color::white(),
            )),
            scrollbar: ScrollBar::new(
                Rect::new(size.x - SCROLLBAR_W, TITLE_BAR_H, SCROLLBAR_W, visible),
                Vec2::new(content_w, content_h),
                visible,
            ),
            name_label: Label::new(Vec2::new(10.0, bottom_mid), "File Name: ", font)
                .font_size(23.0),
            field: TextInput::new(Vec2::new(50.0 + size.x / 2.0, bottom_mid), 380.0, font)
                .reject(INVALID_NAME_CHARS),
            ok: Button::new(
                Rect::new(size.x - 200.0, size.y - 35.0, 80.0, 20.0),
                font,
            )
            .text("OK"),
            cancel: Button::new(
                Rect::new(size.x - 100.0, size.y - 35.0, 80.0, 20.0),
                font,
            )
            .text("CANCEL"),
            names,
            outcome: None,
        })
    }

    // ── state ───────────────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    /// Dialog bounds in host coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Whether the dialog has finished; once true, `update` is inert.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&DialogOutcome> {
        self.outcome.as_ref()
    }

    /// The encoded result: `"<mode>|<name>"` after OK, `"<mode>|"` when
    /// cancelled, closed or still running.
    pub fn result(&self) -> String {
        match &self.outcome {
            Some(DialogOutcome::Confirmed(name)) => format!("{}|{}", self.mode, name),
            _ => format!("{}|", self.mode),
        }
    }

    fn viewport(&self) -> Rect {
        Rect::new(
            0.0,
            TITLE_BAR_H,
            self.size.x - SCROLLBAR_W,
            self.size.y - TITLE_BAR_H - BOTTOM_BAR_H,
        )
    }
}

impl Widget for FileDialog {
    fn update(&mut self, ctx: &mut InputCtx<'_>) {
        if self.outcome.is_some() {
            return;
        }
        let global_pointer = ctx.pointer();
        let mut local = ctx.translated(self.position);

        // Chrome first, so its claims beat everything underneath.
        self.close.update(&mut local);
        if self.close.was_pressed() {
            self.outcome = Some(DialogOutcome::Cancelled);
            return;
        }

        // Title-bar drag. The grab anchor is the pointer's offset inside
        // the dialog; the window follows so that offset never changes.
        if !local.pressed() {
            self.drag = None;
        }
        let bar = Rect::new(0.0, 0.0, self.size.x, TITLE_BAR_H);
        if self.drag.is_none() && local.try_claim(bar) {
            self.drag = Some(local.pointer());
        }
        if let Some(anchor) = self.drag {
            self.position = global_pointer - anchor;
        }

        // Grid. The pointer is parked far away while the cursor is off
        // the viewport, so covered tiles cannot hover or take presses
        // through the surrounding chrome.
        let scroll = self.scrollbar.clip().origin.y;
        let grid_origin = if self.viewport().contains(local.pointer()) {
            Vec2::new(0.0, TITLE_BAR_H - scroll)
        } else {
            Vec2::splat(1.0e6)
        };
        {
            let mut grid = local.translated(grid_origin);
            self.tiles.update(&mut grid);
        }
        self.scrollbar.update(&mut local);

        // The selection owns the name field.
        if let Some(i) = self.tiles.selected() {
            self.field.set_text(stem(&self.names[i]));
        }

        self.ok.update(&mut local);
        if self.ok.was_pressed() {
            self.outcome = Some(DialogOutcome::Confirmed(
                self.field.current_text().to_string(),
            ));
            return;
        }
        self.cancel.update(&mut local);
        if self.cancel.was_pressed() {
            self.outcome = Some(DialogOutcome::Cancelled);
            return;
        }
        self.field.update(&mut local);
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        painter.offset(self.position, |p| {
            let size = self.size;

            // Tiles repaint onto the retained content surface, then the
            // scrollbar's window of it lands in the viewport.
            {
                let mut content = self.content.borrow_mut();
                content.fill(Color::white());
                let mut grid_painter = Painter::new(&mut *content, p.fonts());
                self.tiles.draw(&mut grid_painter);
            }
            let content = self.content.borrow();
            p.blit_window(&content, self.scrollbar.clip(), Vec2::new(0.0, TITLE_BAR_H));
            self.scrollbar.draw(p);

            let bar = Rect::new(0.0, 0.0, size.x, TITLE_BAR_H);
            p.fill_rect(bar, Color::rgb(0xef, 0xef, 0xef), 0.0);
            let title = self.mode.title();
            let title_h = p.line_height(self.font, 25.0);
            p.text(
                &title,
                self.font,
                25.0,
                Color::black(),
                Vec2::new(10.0, 15.0 - title_h * 0.5),
                None,
            );
            p.stroke_rect(bar, Color::black(), 1.0, 0.0);
            self.close.draw(p);

            let bottom = Rect::new(0.0, size.y - BOTTOM_BAR_H, size.x, BOTTOM_BAR_H);
            p.fill_rect(bottom, Color::rgb(0xf0, 0xf0, 0xf0), 0.0);
            self.name_label.draw(p);
            self.ok.draw(p);
            self.cancel.draw(p);
            self.field.draw(p);

            p.stroke_rect(
                Rect::from_origin_size(Vec2::zero(), size),
                Color::black(),
                1.0,
                0.0,
            );
        });
    }
}

// ── helpers ─────────────────────────────────────────────────────────────────

fn has_image_ext(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            e.eq_ignore_ascii_case("png")
                || e.eq_ignore_ascii_case("jpg")
                || e.eq_ignore_ascii_case("jpeg")
        })
        .unwrap_or(false)
}

fn stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

fn placeholder_preview() -> Pixmap {
    Pixmap::filled(PREVIEW_SIDE as u32, PREVIEW_SIDE as u32, Color::black())
}

fn tile_style() -> ToggleStyle {
    let black = Color::black();
    let white = Color::white();
    let hover = Color::rgb(0xe5, 0xf3, 0xff);
    let active = Color::rgb(0xcc, 0xe8, 0xff);
    let active_border = Color::rgb(0x99, 0xd1, 0xff);
    ToggleStyle {
        idle: FaceStyle::new(white, black, white),
        hover: FaceStyle::new(hover, black, hover),
        active: FaceStyle::new(active, black, active_border),
        active_hover: FaceStyle::new(active, black, active_border),
        border_width: 2.0,
        corner_radius: 0.0,
        ..ToggleStyle::default()
    }
}

fn close_style() -> ButtonStyle {
    let black = Color::black();
    ButtonStyle {
        idle: FaceStyle::new(Color::rgb(0xef, 0xef, 0xef), black, black),
        hover: FaceStyle::new(Color::rgb(0xff, 0x44, 0x44), Color::rgb(0xef, 0xef, 0xef), black),
        pressed: FaceStyle::new(Color::rgb(0x44, 0x44, 0x44), Color::white(), black),
        corner_radius: 0.0,
        ..ButtonStyle::default()
    }
}

// ── tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use easel_core::input::KeyEvent;
    use easel_core::text::FontStore;
    use std::io;

    struct FakeFs {
        names: Vec<&'static str>,
    }

    impl FileSource for FakeFs {
        fn entries(&self, _dir: &Path) -> io::Result<Vec<String>> {
            Ok(self.names.iter().map(|s| s.to_string()).collect())
        }

        fn thumbnail(&self, path: &Path, size: Vec2) -> Option<Pixmap> {
            if path.to_string_lossy().contains("broken") {
                return None;
            }
            Some(Pixmap::filled(
                size.x as u32,
                size.y as u32,
                Color::rgb(0, 128, 0),
            ))
        }
    }

    struct FailingFs;

    impl FileSource for FailingFs {
        fn entries(&self, _dir: &Path) -> io::Result<Vec<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
        }

        fn thumbnail(&self, _path: &Path, _size: Vec2) -> Option<Pixmap> {
            None
        }
    }

    fn font() -> FontId {
        FontStore::with_builtin().1
    }

    fn dialog(names: &[&'static str], mode: &str) -> FileDialog {
        let source = FakeFs {
            names: names.to_vec(),
        };
        FileDialog::new(
            Vec2::new(520.0, 520.0),
            Vec2::zero(),
            Path::new("/pics"),
            mode,
            font(),
            &source,
        )
        .unwrap()
    }

    fn click(dialog: &mut FileDialog, state: &mut InputState, at: Vec2) {
        dialog.update(&mut state.begin_frame(at, true, None));
        dialog.update(&mut state.begin_frame(at, false, None));
    }

    fn type_text(dialog: &mut FileDialog, state: &mut InputState, text: &str) {
        for ch in text.chars() {
            let ev = KeyEvent::character(ch);
            dialog.update(&mut state.begin_frame(Vec2::new(-50.0, -50.0), false, Some(ev)));
        }
    }

    // Field center is (310, 460) for a 520x520 dialog at the origin.
    const FIELD: Vec2 = Vec2 { x: 310.0, y: 460.0 };
    const OK: Vec2 = Vec2 { x: 360.0, y: 495.0 };
    const CANCEL: Vec2 = Vec2 { x: 460.0, y: 495.0 };
    const CLOSE: Vec2 = Vec2 { x: 500.0, y: 15.0 };

    #[test]
    fn open_flow_selects_a_tile_and_confirms() {
        let mut dlg = dialog(&["a.png", "b.png", "c.png", "d.png", "e.png"], "open");
        let mut state = InputState::new();

        // Third tile: content rect (340, 20)-(480, 180), shown at y+30.
        click(&mut dlg, &mut state, Vec2::new(400.0, 100.0));
        assert!(!dlg.is_closed());

        click(&mut dlg, &mut state, OK);
        assert!(dlg.is_closed());
        assert_eq!(dlg.result(), "open|c");
        assert_eq!(
            dlg.outcome(),
            Some(&DialogOutcome::Confirmed("c".to_string()))
        );
    }

    #[test]
    fn save_flow_types_a_name_and_confirms() {
        let mut dlg = dialog(&["notes.txt"], "save");
        let mut state = InputState::new();

        click(&mut dlg, &mut state, FIELD);
        type_text(&mut dlg, &mut state, "report");
        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "save|report");
    }

    #[test]
    fn typed_name_drops_rejected_characters() {
        let mut dlg = dialog(&[], "save");
        let mut state = InputState::new();

        click(&mut dlg, &mut state, FIELD);
        type_text(&mut dlg, &mut state, "a/b:c");
        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "save|abc");
    }

    #[test]
    fn close_cancels_and_freezes_the_dialog() {
        let mut dlg = dialog(&["a.png"], "open");
        let mut state = InputState::new();

        click(&mut dlg, &mut state, CLOSE);
        assert!(dlg.is_closed());
        assert_eq!(dlg.outcome(), Some(&DialogOutcome::Cancelled));
        assert_eq!(dlg.result(), "open|");

        // Further input changes nothing.
        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "open|");
    }

    #[test]
    fn cancel_discards_whatever_was_typed() {
        let mut dlg = dialog(&["notes.txt"], "save");
        let mut state = InputState::new();

        click(&mut dlg, &mut state, FIELD);
        type_text(&mut dlg, &mut state, "report");
        click(&mut dlg, &mut state, CANCEL);
        assert_eq!(dlg.result(), "save|");
        assert_eq!(dlg.outcome(), Some(&DialogOutcome::Cancelled));
    }

    #[test]
    fn reselecting_moves_the_selection_and_the_name() {
        let names = [
            "alpha.txt", "beta.png", "gamma.txt", "delta.txt", "eps.txt", "zeta.png",
            "eta.txt", "theta.txt", "iota.txt", "kappa.txt",
        ];
        let mut dlg = dialog(&names, "open");
        let mut state = InputState::new();

        // Second row: tile 3 sits at content (20, 200), tile 5 at (340, 200).
        click(&mut dlg, &mut state, Vec2::new(90.0, 310.0));
        click(&mut dlg, &mut state, Vec2::new(410.0, 310.0));

        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "open|zeta");
    }

    #[test]
    fn selected_tile_overrides_typed_text() {
        let mut dlg = dialog(&["a.png", "b.png", "c.png"], "open");
        let mut state = InputState::new();

        // Select the third tile, then type into the field anyway.
        click(&mut dlg, &mut state, Vec2::new(400.0, 100.0));
        click(&mut dlg, &mut state, FIELD);
        type_text(&mut dlg, &mut state, "zzz");

        // The mirror wins on the OK frame.
        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "open|c");
    }

    #[test]
    fn scrolling_reaches_tiles_below_the_fold() {
        let names = [
            "a.png", "b.png", "c.png", "d.png", "e.png", "f.png", "g.png", "h.png", "i.png",
            "j.png", "k.png", "l.png",
        ];
        let mut dlg = dialog(&names, "open");
        let mut state = InputState::new();

        // 12 files: content is 740px tall behind a 400px viewport.
        // Drag the thumb 100px down, scrolling the content by 185px.
        dlg.update(&mut state.begin_frame(Vec2::new(510.0, 100.0), true, None));
        dlg.update(&mut state.begin_frame(Vec2::new(510.0, 200.0), true, None));
        dlg.update(&mut state.begin_frame(Vec2::new(510.0, 200.0), false, None));

        // Dialog (100, 100) now maps to content (100, 255): second row,
        // first column, which is "d.png".
        click(&mut dlg, &mut state, Vec2::new(100.0, 100.0));
        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "open|d");
    }

    #[test]
    fn clicks_in_the_chrome_cannot_reach_covered_tiles() {
        let names = [
            "a.png", "b.png", "c.png", "d.png", "e.png", "f.png", "g.png", "h.png", "i.png",
            "j.png", "k.png", "l.png",
        ];
        let mut dlg = dialog(&names, "open");
        let mut state = InputState::new();

        // With 740px of content there are tiles underneath the bottom
        // bar. A press on OK belongs to OK, not to a hidden tile.
        click(&mut dlg, &mut state, OK);
        assert!(dlg.is_closed());
        assert_eq!(dlg.result(), "open|");
    }

    #[test]
    fn dragging_the_title_bar_moves_the_dialog() {
        let mut dlg = dialog(&["a.png"], "open");
        let mut state = InputState::new();

        dlg.update(&mut state.begin_frame(Vec2::new(200.0, 15.0), true, None));
        dlg.update(&mut state.begin_frame(Vec2::new(260.0, 55.0), true, None));
        dlg.update(&mut state.begin_frame(Vec2::new(260.0, 55.0), false, None));
        assert_eq!(dlg.rect().origin, Vec2::new(60.0, 40.0));

        // Widgets follow: OK is now offset by the same delta.
        click(&mut dlg, &mut state, OK + Vec2::new(60.0, 40.0));
        assert!(dlg.is_closed());
    }

    #[test]
    fn close_button_wins_over_the_title_drag() {
        let mut dlg = dialog(&[], "open");
        let mut state = InputState::new();

        dlg.update(&mut state.begin_frame(CLOSE, true, None));
        assert!(dlg.is_closed());
        assert_eq!(dlg.rect().origin, Vec2::zero());
    }

    #[test]
    fn empty_directory_still_saves() {
        let mut dlg = dialog(&[], "save");
        let mut state = InputState::new();

        click(&mut dlg, &mut state, FIELD);
        type_text(&mut dlg, &mut state, "fresh");
        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "save|fresh");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let source = FakeFs { names: vec![] };
        let err = FileDialog::new(
            Vec2::new(520.0, 520.0),
            Vec2::zero(),
            Path::new("/pics"),
            "view",
            font(),
            &source,
        )
        .unwrap_err();
        assert!(matches!(err, DialogError::InvalidMode(m) if m == "view"));
    }

    #[test]
    fn unlistable_directory_is_an_io_error() {
        let err = FileDialog::new(
            Vec2::new(520.0, 520.0),
            Vec2::zero(),
            Path::new("/locked"),
            "open",
            font(),
            &FailingFs,
        )
        .unwrap_err();
        assert!(matches!(err, DialogError::Io(_)));
    }

    #[test]
    fn broken_previews_fall_back_to_placeholders() {
        let mut dlg = dialog(&["broken.png", "fine.png", "notes.txt"], "open");
        let mut state = InputState::new();

        // Still interactive: select the first tile and confirm.
        click(&mut dlg, &mut state, Vec2::new(90.0, 100.0));
        click(&mut dlg, &mut state, OK);
        assert_eq!(dlg.result(), "open|broken");
    }

    #[test]
    fn draw_renders_the_chrome() {
        let (fonts, font) = FontStore::with_builtin();
        let source = FakeFs {
            names: vec!["a.png"],
        };
        let dlg = FileDialog::new(
            Vec2::new(520.0, 520.0),
            Vec2::new(40.0, 20.0),
            Path::new("/pics"),
            "open",
            font,
            &source,
        )
        .unwrap();

        let mut pm = Pixmap::new(600, 600);
        dlg.draw(&mut Painter::new(&mut pm, &fonts));

        // Title bar fill right of the title text, clear of the close button.
        assert_eq!(pm.pixel(500, 35), Some(Color::rgb(0xef, 0xef, 0xef)));
        // Bottom bar fill.
        assert_eq!(pm.pixel(45, 500), Some(Color::rgb(0xf0, 0xf0, 0xf0)));
        // White content margin inside the viewport.
        assert_eq!(pm.pixel(45, 55), Some(Color::white()));
    }
}
