use clap::Parser;

use mandelbrot_explorer::{PpmFilePresenter, SnapshotArgs, SnapshotController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = SnapshotArgs::parse();
    let mut controller = SnapshotController::new(PpmFilePresenter::new());

    controller.generate(&args)?;
    controller.write(&args.output)?;

    Ok(())
}
