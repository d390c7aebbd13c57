use clap::Parser;
use cutter::{app::CutterApp, cut::CutError};

fn main() -> Result<(), CutError> {
    env_logger::init();
    let args = CutterApp::parse();
    args.op.run()
}
