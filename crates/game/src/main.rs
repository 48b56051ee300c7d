use tracing::error;

mod app;

fn main() {
    let wiring = app::bootstrap::build_app();
    if let Err(err) = engine::run_app(wiring.config, wiring.game) {
        error!(error = %err, "startup_failed");
        std::process::exit(1);
    }
}
