fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the portfolio
    portfolio_site::run_app()
}
