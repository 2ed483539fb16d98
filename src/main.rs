use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dealership_backend::config::environment::EnvironmentConfig;
use dealership_backend::database::{self, connection::mask_database_url};
use dealership_backend::routes::create_router;
use dealership_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 AutoElite Motors - Backend del concesionario");
    info!("===============================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    info!("📦 Conectando a {}", mask_database_url(&config.database_url));
    let pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    database::run_migrations(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let state = AppState::new(pool, config.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚙 Catálogo:");
    info!("   GET  /api/vehicles - Listar vehículos (filtros/orden/límite)");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   POST /api/vehicles - Crear vehículo (admin)");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo (admin)");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo (admin)");
    info!("📋 Consultas:");
    info!("   POST /api/enquiries - Crear consulta (público)");
    info!("   GET  /api/enquiries - Listar consultas (admin)");
    info!("   POST /api/enquiries/:id/notes - Agregar nota (admin)");
    info!("⭐ Testimonios:");
    info!("   GET  /api/testimonials - Listar testimonios");
    info!("⚙️  Configuración:");
    info!("   GET  /api/settings - Configuración del sitio");
    info!("🔐 Administración:");
    info!("   POST /api/admin/login - Login");
    info!("   GET  /api/admin/me - Perfil actual (admin)");
    info!("   GET  /api/admin/stats - Estadísticas (admin)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
