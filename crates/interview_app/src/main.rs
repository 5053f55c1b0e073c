mod app;
mod effects;
mod logging;
mod ui;

fn main() -> std::io::Result<()> {
    // The TUI owns the terminal, so logs go to a file by default.
    logging::initialize(logging::LogDestination::File);
    app::run_app()
}
