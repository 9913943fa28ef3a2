use std::error::Error;
use subnet_summary::menu::run_menu;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_menu(stdin.lock(), stdout.lock())?;

    Ok(())
}
