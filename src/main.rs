mod app;
mod charge;
mod config;
mod field;
mod fraction;
mod init_config;
mod io;
mod renderer;
mod scenario;

fn main() {
    app::run();
}
