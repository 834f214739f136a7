use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use chromatch::graphics::FrameRenderer;
use chromatch::input::{InputAction, InputHandler};
use chromatch::spawner::{TriangleField, TRIANGLE_SIZE};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Triangles")
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut graphics = FrameRenderer::new(&window, WIDTH, HEIGHT)?;
    let mut field = TriangleField::new(WIDTH, HEIGHT);
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
                WindowEvent::CursorMoved { position, .. } => {
                    input_handler.handle_cursor_moved(position.x, position.y);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if let InputAction::Click { x, y } =
                        input_handler.handle_mouse_button(button, state)
                    {
                        field.spawn_at(x as f32, y as f32);
                        log::debug!("spawned triangle at ({:.0}, {:.0})", x, y);
                        redraw_requested = true;
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input_handler.handle_keyboard_input(&input) == InputAction::Exit {
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if redraw_requested {
                    graphics.render_triangles(field.triangles(), TRIANGLE_SIZE);
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
