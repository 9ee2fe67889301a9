use std::process::ExitCode;

fn main() -> ExitCode {
    version_server::main_for(version_server::variants::hello_group())
}
