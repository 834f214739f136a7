use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use chromatch::graphics::FrameRenderer;
use chromatch::input::{InputAction, InputHandler};
use chromatch::parallax::ParallaxScene;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

/// Camera movement per arrow-key press, before per-layer speed scaling.
const SCROLL_STEP: f32 = 10.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Parallax")
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut graphics = FrameRenderer::new(&window, WIDTH, HEIGHT)?;
    let mut scene = ParallaxScene::demo(WIDTH, HEIGHT);
    let mut input_handler = InputHandler::new();
    let mut redraw_requested = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize(size.width, size.height);
                    redraw_requested = true;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    match input_handler.handle_keyboard_input(&input) {
                        InputAction::ScrollLeft => {
                            scene.scroll(-SCROLL_STEP);
                            redraw_requested = true;
                        }
                        InputAction::ScrollRight => {
                            scene.scroll(SCROLL_STEP);
                            redraw_requested = true;
                        }
                        InputAction::Exit => {
                            *control_flow = ControlFlow::Exit;
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if redraw_requested {
                    graphics.render_parallax(&scene);
                    if let Err(err) = graphics.present() {
                        log::error!("Render error: {}", err);
                        *control_flow = ControlFlow::Exit;
                    }
                    redraw_requested = false;
                }
            }
            _ => {}
        }
    });
}
