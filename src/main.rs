use std::{process, sync::Arc};

use atelier::{
    application::{
        admin::{
            AdminArtworkService, AdminCollectionService, AdminMediaService, AdminSectionService,
        },
        error::AppError,
        newsletter::NewsletterService,
        repos::{
            ArtworksRepo, ArtworksWriteRepo, CollectionsRepo, CollectionsWriteRepo, MediaRepo,
            SectionsRepo, SubscribersRepo,
        },
    },
    config,
    infra::{
        db::PostgresRepositories,
        error::InfraError,
        http::{self, ApiState},
        telemetry,
    },
    revalidation::{HttpCacheInvalidator, RevalidationConfig, RevalidationCoordinator},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Revalidate(_) => run_revalidate(settings).await,
    }
}

fn build_coordinator(settings: &config::Settings) -> Arc<RevalidationCoordinator> {
    let config = RevalidationConfig::from(&settings.revalidation);
    let invalidator = Arc::new(HttpCacheInvalidator::new(
        settings.revalidation.endpoint.clone(),
    ));
    Arc::new(RevalidationCoordinator::new(config, invalidator))
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let url = settings
        .database
        .url
        .as_deref()
        .ok_or_else(|| AppError::from(InfraError::configuration("database.url is required")))?;

    let pool = PostgresRepositories::connect(url, settings.database.max_connections.get())
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    let repositories = PostgresRepositories::new(pool);
    let coordinator = build_coordinator(&settings);

    let artworks_reader: Arc<dyn ArtworksRepo> = Arc::new(repositories.clone());
    let artworks_writer: Arc<dyn ArtworksWriteRepo> = Arc::new(repositories.clone());
    let collections_reader: Arc<dyn CollectionsRepo> = Arc::new(repositories.clone());
    let collections_writer: Arc<dyn CollectionsWriteRepo> = Arc::new(repositories.clone());
    let media: Arc<dyn MediaRepo> = Arc::new(repositories.clone());
    let sections: Arc<dyn SectionsRepo> = Arc::new(repositories.clone());
    let subscribers: Arc<dyn SubscribersRepo> = Arc::new(repositories.clone());

    let state = ApiState {
        artworks: AdminArtworkService::new(
            artworks_reader.clone(),
            artworks_writer,
            collections_reader.clone(),
        )
        .with_revalidation_opt(Some(coordinator.clone())),
        collections: AdminCollectionService::new(collections_reader.clone(), collections_writer)
            .with_revalidation_opt(Some(coordinator.clone())),
        media: AdminMediaService::new(media, artworks_reader.clone(), collections_reader.clone())
            .with_revalidation_opt(Some(coordinator.clone())),
        sections: AdminSectionService::new(sections, artworks_reader, collections_reader)
            .with_revalidation_opt(Some(coordinator)),
        newsletter: NewsletterService::new(subscribers),
        db: Some(repositories),
    };

    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(addr = %settings.server.addr, "Atelier listening");

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

async fn run_revalidate(settings: config::Settings) -> Result<(), AppError> {
    let coordinator = build_coordinator(&settings);
    if !coordinator.config().is_enabled() {
        return Err(AppError::validation(
            "revalidation is disabled or no locales are configured",
        ));
    }

    coordinator.sweep().await;
    Ok(())
}
