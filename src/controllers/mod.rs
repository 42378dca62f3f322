pub mod cli;
pub mod explorer;
pub mod interactive;
pub mod ports;
pub mod surface;
