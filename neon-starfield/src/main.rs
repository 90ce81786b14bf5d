use neon_starfield::engine::core::app_setup::create_app;
use neon_starfield::engine::core::app_state::FrameMode;

fn main() {
    let mut app = create_app(FrameMode::DisplayRefresh);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
