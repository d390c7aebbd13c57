pub mod app;
pub mod cut;
pub mod io;
