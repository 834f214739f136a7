use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use chromatch::config::GameConfig;
use chromatch::game::ColorGame;
use chromatch::graphics::FrameRenderer;
use chromatch::input::{InputAction, InputHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional JSON config as the first argument; otherwise the classic
    // 6x8 board of 100px cells.
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Color Game")
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut graphics = FrameRenderer::new(&window, config.window_width, config.window_height)?;
    let mut game = ColorGame::new(config);
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
                        // Clicks outside the grid area map to no cell and
                        // are ignored.
                        if let Some((row, col)) = game.cell_at_pixel(x, y) {
                            game.select_cell(row, col);
                            redraw_requested = true;
                        }
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    match input_handler.handle_keyboard_input(&input) {
                        InputAction::Restart => {
                            game.restart();
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
                // A cleared board restarts before the next draw, so a won
                // round is replaced by a fresh grid within one frame.
                if game.is_round_complete() {
                    game.restart();
                    redraw_requested = true;
                }

                if redraw_requested {
                    graphics.render_game(&game);
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
