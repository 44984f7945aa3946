use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::app_state::BlazingPaddlesApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Blazing Paddles egui application");

    // Window sized for a week of time slots plus the sessions list
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 640.0])
            .with_title("Blazing Paddles")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Blazing Paddles",
        options,
        Box::new(|cc| match BlazingPaddlesApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Blazing Paddles app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
