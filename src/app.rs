// app.rs
// Window bootstrap: hands the renderer to quarkstrom and blocks on its loop

use crate::renderer::Renderer;

pub fn run() {
    let config = quarkstrom::Config {
        window_mode: quarkstrom::WindowMode::Maximized,
    };
    quarkstrom::run::<Renderer>(config);
}
