use std::process::ExitCode;

fn main() -> ExitCode {
    rss_ui_lib::run()
}
