use std::process::ExitCode;

fn main() -> ExitCode {
    lingo_diff_lib::run()
}
