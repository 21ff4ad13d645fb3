use check_json::probe::run_from_args;
use check_json::LOGGER_NAME;
use common::logger::init_logger;
use log::debug;

#[tokio::main]
async fn main() {
    // Load env file
    dotenv::dotenv().ok();
    // Init logger, it never writes to stdout
    let res = init_logger(LOGGER_NAME);
    debug!("{}", res);
    let report = run_from_args(std::env::args_os()).await;
    println!("{}", report);
    std::process::exit(report.exit_code());
}
