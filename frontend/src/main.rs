mod components;
mod controller;
mod shell;
mod storage;

fn main() {
    // This binary is loaded by every authenticated page. It reads the session the login page left in
    // local storage, then either sends the user back to login or wraps the page in the sidebar shell.
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);

    controller::start();
}
