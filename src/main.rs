use recipe_planner::config::Config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    recipe_planner::init_logging();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match recipe_planner::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
