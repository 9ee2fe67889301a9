use std::process::ExitCode;

fn main() -> ExitCode {
    version_server::main_for(version_server::variants::version_only())
}
