// ============================================================================
// compress-errorbar
// Thin wrapper over errorbar::cli: parse args, print, exit with status
// ============================================================================

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    errorbar::cli::init_tracing();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = errorbar::cli::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock());

    status.into()
}
