//! Driver de demo: reproduce el escenario clásico del registro de
//! covoiturage contra un servidor levantado, paso a paso.

use anyhow::Result;
use colored::*;
use reqwest::Client;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    let base_url =
        std::env::var("RIDE_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    println!("{}", "🚗 Ride Sharing Demo Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!("Servidor: {}", base_url.bright_yellow());
    println!();

    let client = Client::new();

    // Comprobar que el servidor responde antes de empezar
    let ping = client.get(format!("{}/test", base_url)).send().await;
    if ping.is_err() {
        println!(
            "{}",
            "❌ No se pudo conectar al servidor. ¿Está levantado?".bright_red()
        );
        std::process::exit(1);
    }
    println!("{}", "✅ Servidor disponible".bright_green());
    println!();

    println!("{}", "👤 REGISTRO DE USUARIOS Y VEHÍCULOS".bright_cyan().bold());
    println!("{}", "====================================".bright_cyan());
    register_user(&client, &base_url, "Amit", 36).await?;
    register_vehicle(&client, &base_url, "Amit", "Swift", "KA-01-12345").await?;
    register_user(&client, &base_url, "Neeraj", 29).await?;
    register_vehicle(&client, &base_url, "Neeraj", "Baleno", "TS-05-62395").await?;
    register_user(&client, &base_url, "Sneha", 29).await?;
    register_user(&client, &base_url, "Ritu", 27).await?;
    register_vehicle(&client, &base_url, "Ritu", "Polo", "KA-05-41491").await?;
    register_vehicle(&client, &base_url, "Ritu", "Activa", "KA-12-12332").await?;
    register_user(&client, &base_url, "Vikas", 35).await?;
    register_vehicle(&client, &base_url, "Vikas", "XUV", "KA-05-1234").await?;

    println!();
    println!("{}", "🛣️ OFERTAS DE RIDES".bright_cyan().bold());
    println!("{}", "====================".bright_cyan());
    offer_ride(&client, &base_url, "Amit", "Hyderabad", "Bangalore", 2, "Swift").await?;
    offer_ride(&client, &base_url, "Neeraj", "Bangalore", "Mysore", 1, "Baleno").await?;
    offer_ride(&client, &base_url, "Ritu", "Bangalore", "Mysore", 2, "Polo").await?;
    offer_ride(&client, &base_url, "Ritu", "Bangalore", "Mysore", 1, "Activa").await?;

    println!();
    println!("{}", "🎫 RESERVAS".bright_cyan().bold());
    println!("{}", "============".bright_cyan());
    select_ride(&client, &base_url, "Sneha", "Bangalore", "Mysore", 1, "MostVacant", None).await?;
    select_ride(&client, &base_url, "Vikas", "Bangalore", "Mysore", 1, "PreferredVehicle", Some("Activa")).await?;
    select_ride(&client, &base_url, "Neeraj", "Mumbai", "Bangalore", 1, "MostVacant", None).await?;
    select_ride(&client, &base_url, "Amit", "Hyderabad", "Bangalore", 1, "PreferredVehicle", Some("Baleno")).await?;

    println!();
    println!("{}", "🏁 FIN DE RIDES".bright_cyan().bold());
    println!("{}", "================".bright_cyan());
    end_ride(&client, &base_url, "Polo").await?;
    end_ride(&client, &base_url, "Activa").await?;

    println!();
    println!("{}", "📊 ESTADÍSTICAS".bright_cyan().bold());
    println!("{}", "================".bright_cyan());
    print_stats(&client, &base_url).await?;

    println!();
    println!("{}", "👋 Demo completada".bright_green().bold());
    Ok(())
}

async fn register_user(client: &Client, base_url: &str, name: &str, age: u32) -> Result<()> {
    let body = json!({ "name": name, "age": age });
    let step = format!("Registrar usuario {} ({} años)", name, age);
    post_step(client, base_url, "/api/user/register", body, &step).await
}

async fn register_vehicle(
    client: &Client,
    base_url: &str,
    owner: &str,
    name: &str,
    number: &str,
) -> Result<()> {
    let body = json!({ "owner_name": owner, "vehicle_name": name, "number": number });
    let step = format!("Registrar vehículo {} ({}) de {}", name, number, owner);
    post_step(client, base_url, "/api/vehicle/register", body, &step).await
}

#[allow(clippy::too_many_arguments)]
async fn offer_ride(
    client: &Client,
    base_url: &str,
    user: &str,
    origin: &str,
    destination: &str,
    seats: u32,
    vehicle: &str,
) -> Result<()> {
    let body = json!({
        "user_name": user,
        "origin": origin,
        "destination": destination,
        "seats": seats,
        "vehicle_name": vehicle
    });
    let step = format!(
        "{} ofrece {} a {} con {} ({} asientos)",
        user, origin, destination, vehicle, seats
    );
    post_step(client, base_url, "/api/ride/offer", body, &step).await
}

#[allow(clippy::too_many_arguments)]
async fn select_ride(
    client: &Client,
    base_url: &str,
    user: &str,
    source: &str,
    destination: &str,
    seats: u32,
    strategy: &str,
    preferred_vehicle: Option<&str>,
) -> Result<()> {
    let body = json!({
        "user_name": user,
        "source": source,
        "destination": destination,
        "seats": seats,
        "strategy": strategy,
        "preferred_vehicle_name": preferred_vehicle
    });
    let step = format!(
        "{} busca {} a {} ({} asiento(s), {})",
        user, source, destination, seats, strategy
    );
    post_step(client, base_url, "/api/ride/select", body, &step).await
}

async fn end_ride(client: &Client, base_url: &str, vehicle: &str) -> Result<()> {
    let body = json!({ "vehicle_name": vehicle });
    let step = format!("Terminar ride del vehículo {}", vehicle);
    post_step(client, base_url, "/api/ride/end", body, &step).await
}

/// Ejecuta un paso del demo e imprime el resultado. Los rechazos del
/// servidor son parte del guion, así que no cortan la ejecución.
async fn post_step(
    client: &Client,
    base_url: &str,
    path: &str,
    body: Value,
    step: &str,
) -> Result<()> {
    let response = client
        .post(format!("{}{}", base_url, path))
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let payload: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        let message = payload["message"].as_str().unwrap_or("ok");
        println!("  {} {} - {}", "✅".green(), step, message.bright_green());
    } else {
        let code = payload["code"].as_str().unwrap_or("?");
        let message = payload["message"].as_str().unwrap_or("sin detalle");
        println!(
            "  {} {} - [{}] {}",
            "❌".red(),
            step,
            code.bright_yellow(),
            message.bright_red()
        );
    }
    Ok(())
}

async fn print_stats(client: &Client, base_url: &str) -> Result<()> {
    let payload: Value = client
        .get(format!("{}/api/stats", base_url))
        .send()
        .await?
        .json()
        .await?;

    if let Some(users) = payload["users"].as_array() {
        for user in users {
            println!(
                "  {}: Rides Offered - {}, Rides Taken - {}, In-Progress - {}",
                user["name"].as_str().unwrap_or("?").bright_yellow(),
                user["rides_offered"],
                user["rides_taken"],
                user["in_progress"]
            );
        }
    }
    Ok(())
}
