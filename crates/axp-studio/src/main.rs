use anyhow::{bail, Context, Result};
use axp_engine::coords::{ColorRgba, Rect, Vec2, Vec3};
use axp_engine::input::{InputEvent, MouseAction, MouseButton};
use axp_engine::logging::{init_logging, LoggingConfig};
use axp_engine::window::{FrameOutput, HeadlessRuntime, RuntimeConfig, ScriptedInput, SurfaceKind};
use axp_raycast::Raycaster;
use axp_ui::prelude::*;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    run_desktop().context("desktop session failed")?;
    run_raycaster().context("raycaster session failed")?;
    Ok(())
}

// ── desktop ───────────────────────────────────────────────────────────────

fn palette_button(name: &'static str, color: ColorRgba) -> SolidButton {
    SolidButton::new(color).on_click(move |button| log::info!("{name} clicked ({button})"))
}

fn build_desktop() -> Windows {
    let palette = EquallySpacedList::new()
        .spacing(0.05)
        .child(palette_button("red", ColorRgba::new(0.8, 0.2, 0.2, 1.0)))
        .child(palette_button("green", ColorRgba::new(0.2, 0.8, 0.3, 1.0)))
        .child(palette_button("blue", ColorRgba::new(0.3, 0.5, 0.7, 1.0)));

    Windows::new()
        .window(DraggableWindow::new(palette).at(Rect::new(Vec2::new(-0.9, -0.9), Vec2::new(-0.1, 0.6))))
        .window(
            DraggableWindow::new(palette_button("solo", ColorRgba::new(0.3, 0.5, 0.7, 1.0)))
                .at(Rect::new(Vec2::new(0.2, 0.2), Vec2::new(0.8, 0.8))),
        )
}

/// Click a button, then drag the second window sideways by its top edge.
fn desktop_script() -> Vec<ScriptedInput> {
    let moved = |frame, x, y| ScriptedInput::new(frame, InputEvent::PointerMoved(Vec2::new(x, y)));
    let button = |frame, x, y, action| {
        ScriptedInput::new(
            frame,
            InputEvent::PointerButton { pos: Vec2::new(x, y), button: MouseButton::Left, action },
        )
    };

    vec![
        moved(1, -0.5, -0.6),
        button(2, -0.5, -0.6, MouseAction::Press),
        button(3, -0.5, -0.6, MouseAction::Release),
        moved(4, 0.5, 0.795),
        button(5, 0.5, 0.795, MouseAction::Press),
        moved(6, 0.45, 0.795),
        moved(7, 0.4, 0.795),
        button(8, 0.4, 0.795, MouseAction::Release),
    ]
}

fn run_desktop() -> Result<()> {
    let config = RuntimeConfig::default().title("axp desktop");
    let mut ui = UiWindow::new(build_desktop());

    let FrameOutput::Vector(list) = HeadlessRuntime::new(config).run(&mut ui, 10, &desktop_script())? else {
        bail!("desktop produced a pixel frame");
    };
    log::info!("last frame: {} draw commands, input {:?}", list.len(), ui.state());
    for cmd in list.items() {
        log::debug!("{cmd:?}");
    }
    Ok(())
}

// ── raycaster ─────────────────────────────────────────────────────────────

fn run_raycaster() -> Result<()> {
    let config = RuntimeConfig::default()
        .title("axp raycaster")
        .size(96, 96)
        .surface(SurfaceKind::Pixels);
    let mut raycaster = Raycaster::default();

    let FrameOutput::Pixels(grid) = HeadlessRuntime::new(config).run(&mut raycaster, 5, &[])? else {
        bail!("raycaster produced a vector frame");
    };
    let lit = (0..grid.viewport().height)
        .flat_map(|row| (0..grid.viewport().width).map(move |col| (col, row)))
        .filter_map(|(col, row)| grid.color_at(col, row))
        .filter(|c| c.rgb() != Vec3::zero())
        .count();
    log::info!(
        "last frame: {lit}/{} pixels lit, eye at {:?}",
        grid.viewport().pixel_count(),
        raycaster.renderer_config().camera.eye
    );
    Ok(())
}
