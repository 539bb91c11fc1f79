use rocket::launch;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    match gamestore::create_rocket() {
        Ok(rocket) => rocket,
        Err(e) => {
            log::error!("Failed to start gamestore: {e}");
            std::process::exit(1);
        }
    }
}
