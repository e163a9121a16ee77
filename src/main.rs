use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use ride_sharing_backend::config::environment::EnvironmentConfig;
use ride_sharing_backend::create_app;
use ride_sharing_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Ride Sharing Registry - API de covoiturage");
    info!("=============================================");

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_url().parse()?;

    let app_state = AppState::new(config);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("👤 Endpoints - User:");
    info!("   POST /api/user/register - Registrar usuario");
    info!("   GET  /api/user - Listar usuarios");
    info!("🚙 Endpoints - Vehicle:");
    info!("   POST /api/vehicle/register - Registrar vehículo");
    info!("   GET  /api/vehicle/:owner - Vehículos de un usuario");
    info!("🛣️ Endpoints - Ride:");
    info!("   POST /api/ride/offer - Ofrecer un ride");
    info!("   POST /api/ride/select - Reservar asientos (MostVacant / PreferredVehicle)");
    info!("   POST /api/ride/end - Terminar el ride activo de un vehículo");
    info!("   GET  /api/ride - Listar todos los rides");
    info!("📊 Endpoints - Stats:");
    info!("   GET  /api/stats - Estadísticas por usuario");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

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
