use age_calc::utils::{logger, validation::Validate};
use age_calc::{AgeEngine, AgeError, CliConfig};
use clap::Parser;
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file = match config.load_file() {
        Ok(file) => file,
        Err(e) => fail_on_config(&e),
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, file.as_ref().and_then(|f| f.log_directive()));
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Some(file) = &file {
        if let Err(e) = file.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            fail_on_config(&e);
        }
    }

    let clock = match config.clock(file.as_ref()) {
        Ok(clock) => clock,
        Err(e) => fail_on_config(&e),
    };

    let engine = AgeEngine::new(clock);
    let stdin = io::stdin();

    if let Err(e) = engine.run(stdin.lock(), io::stdout().lock()) {
        // 輸入錯誤已在 stdout 印出 "Invalid input"
        if !e.is_input_error() {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
        }
        tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn fail_on_config(e: &AgeError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
