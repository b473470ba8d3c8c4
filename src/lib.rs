pub mod charge;
pub mod config;
pub mod field;
pub mod fraction;
pub mod init_config;
pub mod io;
pub mod renderer;
pub mod scenario;

pub mod app;
