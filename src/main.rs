mod clipboard;
mod completion;
mod config;
mod error;
mod keystroke;
mod logging;
mod mode;
mod notify;
mod processor;

use std::path::Path;
use std::process::ExitCode;

use clipboard::SystemClipboard;
use completion::CompletionClient;
use config::Config;
use keystroke::SystemKeystrokes;
use mode::Mode;
use notify::SystemNotifier;
use processor::TextProcessor;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = logging::init(Path::new(logging::LOG_PATH)) {
        eprintln!("Warning: cannot open log file {}: {e}", logging::LOG_PATH);
    }

    // Nothing touches the clipboard, keyboard or network before this check.
    let api_key = match config::api_key_from_env() {
        Ok(key) => key,
        Err(e) => {
            log::error!("{e}");
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mode = Mode::from_args(std::env::args().skip(1));
    let config = Config::load();
    log::debug!("Running in {mode} mode with model {}", config.model);

    let completer = match CompletionClient::new(&config, api_key) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Error processing text: {e}");
            return ExitCode::SUCCESS;
        }
    };

    let mut processor = TextProcessor {
        keys: SystemKeystrokes::new(),
        clipboard: SystemClipboard::new(),
        completer,
        notifier: SystemNotifier::new(),
        settle_delay: config.settle_delay(),
    };
    processor.run(mode).await;

    ExitCode::SUCCESS
}
