//! Desktop host simulator for the moodface widget.
//!
//! Renders the face widget in an SDL2 window via `embedded-graphics-simulator`
//! and plays the role of the embedding host: it measures the widget, repaints
//! it when dirty, mutates its mood from keyboard input, and exercises the
//! save/restore cycle by tearing the widget down and rebuilding it.
//!
//! # Key bindings
//!
//! | Key   | Action                                    |
//! |-------|-------------------------------------------|
//! | Space | Toggle mood                               |
//! | H     | Happy                                     |
//! | S     | Sad                                       |
//! | R     | Save state, rebuild the widget, restore   |
//! | Q     | Quit                                      |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{info, warn};

use moodface_core::framebuffer::FrameBuffer;
use moodface_core::ui::Widget;
use moodface_core::widgets::{FaceWidget, Mood};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Simulated display width in pixels.
const DISPLAY_WIDTH_PX: u32 = 320;

/// Simulated display height in pixels.
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Host helpers
// ---------------------------------------------------------------------------

/// Build and lay out a face widget the way a host would: construct with
/// configuration, measure against the proposed display area, then place the
/// resolved square centered.
fn build_face(mood: Mood) -> FaceWidget {
    let mut face = FaceWidget::new().with_mood(mood);
    let resolved = face.measure(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let origin = Point::new(
        (DISPLAY_WIDTH_PX as i32 - resolved.width as i32) / 2,
        (DISPLAY_HEIGHT_PX as i32 - resolved.height as i32) / 2,
    );
    let mut face = face.with_origin(origin);
    face.mark_dirty();
    face
}

/// Map an SDL keycode to a mood, if the key selects one directly.
fn keycode_to_mood(keycode: Keycode) -> Option<Mood> {
    match keycode {
        Keycode::H => Some(Mood::Happy),
        Keycode::S => Some(Mood::Sad),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting moodface simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Space=Toggle  H=Happy  S=Sad  R=Save/Restore  Q=Quit");

    // SDL2 display and window
    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Moodface Simulator", &output_settings);

    // Widget drawing lands in the framebuffer; only dirty rectangles are
    // flushed through to the SDL display.
    let mut framebuffer = FrameBuffer::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let mut face = build_face(Mood::Happy);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    draw_if_dirty(&mut face, &mut framebuffer, &mut display);
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if keycode == Keycode::Space {
                        let next = if face.mood().is_happy() {
                            Mood::Sad
                        } else {
                            Mood::Happy
                        };
                        info!("Toggling mood to {:?}", next);
                        face.set_mood(next);
                    } else if let Some(mood) = keycode_to_mood(keycode) {
                        info!("Setting mood to {:?}", mood);
                        face.set_mood(mood);
                    } else if keycode == Keycode::R {
                        face = save_and_rebuild(&face);
                    }
                }

                _ => {}
            }
        }

        // --- Render -------------------------------------------------------
        draw_if_dirty(&mut face, &mut framebuffer, &mut display);
        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}

/// Repaint the widget into the framebuffer and flush changes to the display.
fn draw_if_dirty(
    face: &mut FaceWidget,
    framebuffer: &mut FrameBuffer,
    display: &mut SimulatorDisplay<Rgb565>,
) {
    if !face.is_dirty() {
        return;
    }

    // Infallible: the framebuffer cannot fail to accept pixels.
    let Ok(()) = face.draw(framebuffer);
    face.mark_clean();

    if let Err(e) = framebuffer.flush(display) {
        log::error!("Flush error: {:?}", e);
    }
}

/// Play the host's reconstruction path: serialize the widget's state, build
/// a fresh instance, and restore the blob into it before its first draw.
fn save_and_rebuild(face: &FaceWidget) -> FaceWidget {
    let mut rebuilt = build_face(Mood::default());

    match face.save_state().to_bytes() {
        Ok(blob) => {
            info!("Saved {} byte state blob; rebuilding widget", blob.len());
            rebuilt.restore_from_bytes(&blob);
        }
        Err(err) => {
            warn!("Could not save widget state: {err}");
        }
    }

    rebuilt
}
