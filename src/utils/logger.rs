use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "age_calc=warn";
const VERBOSE_DIRECTIVE: &str = "age_calc=debug";

/// Picks the filter used when `RUST_LOG` is unset: `--verbose` first, then
/// the config file's directive, then the quiet default.
pub fn filter_directive(verbose: bool, directive: Option<&str>) -> String {
    match directive {
        _ if verbose => VERBOSE_DIRECTIVE.to_string(),
        Some(directive) => directive.to_string(),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// 檢查 EnvFilter 指令是否合法
pub fn parse_directive(directive: &str) -> std::result::Result<EnvFilter, String> {
    EnvFilter::try_new(directive).map_err(|e| e.to_string())
}

/// Installs the global subscriber. Logs go to stderr; stdout is reserved for
/// prompts and results.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    let fallback = filter_directive(verbose, directive);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| parse_directive(&fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
