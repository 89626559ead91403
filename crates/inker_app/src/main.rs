#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

mod platform;

fn main() -> eframe::Result<()> {
    platform::run_app()
}
