use minimal_api::{
    config::Config,
    context::DbContext,
    data::{administrator::AdministratorRepository, vehicle::VehicleRepository},
    error::Error,
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let context = DbContext::new(config);
    tracing::info!("Initializing database with backend {}", context.backend());

    let seeded = startup::initialize_database(&context).await?;

    let db = context.connection().await?;
    let administrators = AdministratorRepository::new(db).count().await?;
    let vehicles = VehicleRepository::new(db).count().await?;

    tracing::info!(
        "Database ready: {} administrator(s), {} vehicle(s); seeded {:?}",
        administrators,
        vehicles,
        seeded
    );

    Ok(())
}
