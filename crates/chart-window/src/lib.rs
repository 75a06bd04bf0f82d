// File: crates/chart-window/src/lib.rs
// Summary: Blocking preview window that renders chart-core to RGBA and blits it via winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use chart_core::{Chart, RenderOptions};
use tracing::{debug, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// Open a window showing `chart` and block until it is closed (close button, Escape or Q).
/// The chart is re-rendered at the window size on every redraw.
pub fn show(chart: &Chart, opts: &RenderOptions, title: &str) -> Result<()> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(opts.width.max(1) as u32, opts.height.max(1) as u32))
        .build(&event_loop)
        .map_err(|e| anyhow!("build window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut failure: Option<anyhow::Error> = None;
    info!(title, "showing chart window");

    event_loop.run_return(|event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape | VirtualKeyCode::Q),
                            ..
                        },
                    ..
                } => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present_frame(&mut surface, chart, opts, size) {
                    failure = Some(e);
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn present_frame(
    surface: &mut softbuffer::Surface,
    chart: &Chart,
    opts: &RenderOptions,
    size: PhysicalSize<u32>,
) -> Result<()> {
    // minimised windows report a zero size
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    let mut frame_opts = opts.clone();
    frame_opts.width = w.get() as i32;
    frame_opts.height = h.get() as i32;
    let (rgba, _, _, _) = chart.render_to_rgba8(&frame_opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = pack_xrgb(px);
    }
    frame.present().map_err(|e| anyhow!("present frame: {e}"))?;
    debug!(width = w.get(), height = h.get(), "presented frame");
    Ok(())
}

/// Pack one RGBA pixel into the `0RGB` word softbuffer expects.
pub fn pack_xrgb(px: &[u8]) -> u32 {
    ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
}
