use render_engine::{ModelStore, Renderer, abs::App, config::Settings, logging};

const QUAD: [f32; 12] = [
    -0.5, 0.5, 0.0, //
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    0.5, 0.5, 0.0,
];
const QUAD_INDICES: [u32; 6] = [0, 1, 3, 3, 1, 2];

const TRIANGLE: [f32; 9] = [
    -0.9, -0.9, 0.0, //
    -0.6, -0.9, 0.0, //
    -0.75, -0.6, 0.0,
];

fn main() {
    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let settings = Settings::load_or_default().map_err(|e| e.to_string())?;
    logging::init(settings.log_level_filter(), None).map_err(|e| e.to_string())?;

    let mut app = App::new(&settings.window)?;

    let mut store = ModelStore::new(&app.gl);
    let renderer = Renderer::new(&app.gl, settings.clear_color_vec());

    let quad = store
        .load(&QUAD, Some(&QUAD_INDICES))
        .map_err(|e| e.to_string())?;
    let triangle = store.load(&TRIANGLE, None).map_err(|e| e.to_string())?;

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    glow::HasContext::viewport(app.gl.as_ref(), 0, 0, width, height);
                },
                _ => {}
            }
        }

        renderer.begin_frame();
        renderer.draw_all([&quad, &triangle]);

        app.window.gl_swap_window();
    }

    store.release_all();
    log::info!("Shut down");
    Ok(())
}
