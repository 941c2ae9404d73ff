use anyhow::{Context, Result};
use colored::*;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::io::{self, Write};

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚗 Automobile API Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    // Paso 1: URL del servidor
    let base_url = get_base_url()?;
    let client = Client::new();

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔍 Diagnóstico (GET / y GET /test)");
        println!("2. 🚗 Crear vehículo de ejemplo");
        println!("3. 📋 Listar vehículos");
        println!("4. 🔎 Obtener vehículo por id");
        println!("5. 📨 Crear lead");
        println!("6. 📋 Listar leads");
        println!("7. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-7): ")?;

        let result = match choice.as_str() {
            "1" => test_diagnostics(&client, &base_url).await,
            "2" => create_sample_vehicle(&client, &base_url).await,
            "3" => show(client.get(format!("{}/api/vehicles", base_url)).send().await?).await,
            "4" => {
                let id = prompt("Id del vehículo: ")?;
                show(client.get(format!("{}/api/vehicles/{}", base_url, id)).send().await?).await
            }
            "5" => create_lead(&client, &base_url).await,
            "6" => show(client.get(format!("{}/api/leads", base_url)).send().await?).await,
            "7" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ Error: {:#}", e).bright_red());
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn get_base_url() -> Result<String> {
    if let Ok(url) = std::env::var("API_URL") {
        return Ok(url.trim_end_matches('/').to_string());
    }

    let url = prompt(&format!("URL del servidor [{}]: ", DEFAULT_API_URL))?;
    if url.is_empty() {
        Ok(DEFAULT_API_URL.to_string())
    } else {
        Ok(url.trim_end_matches('/').to_string())
    }
}

/// Mostrar status y body de una respuesta; devuelve el body parseado
async fn show(response: Response) -> Result<()> {
    print_response(response).await.map(|_| ())
}

async fn print_response(response: Response) -> Result<Value> {
    let status = response.status();
    let body: Value = response.json().await.context("La respuesta no es JSON")?;

    let status_line = format!("📥 HTTP {}", status);
    if status.is_success() {
        println!("{}", status_line.bright_green().bold());
    } else {
        println!("{}", status_line.bright_red().bold());
    }
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(body)
}

async fn test_diagnostics(client: &Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🔍 DIAGNÓSTICO".bright_cyan().bold());
    println!("{}", "==============".bright_cyan());

    show(client.get(format!("{}/", base_url)).send().await?).await?;
    show(client.get(format!("{}/test", base_url)).send().await?).await
}

async fn create_sample_vehicle(client: &Client, base_url: &str) -> Result<()> {
    let payload = json!({
        "make": "Toyota",
        "model": "Camry",
        "year": 2022,
        "price": 25000,
        "mileage": 12000,
        "fuel_type": "Hybrid",
        "features": ["Adaptive cruise control", "Apple CarPlay"]
    });

    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/api/vehicles", base_url))
        .json(&payload)
        .send()
        .await?;
    let body = print_response(response).await?;

    // Releer el vehículo creado
    if let Some(id) = body.get("id").and_then(Value::as_str) {
        println!("{}", "🔎 Releyendo vehículo creado...".bright_blue());
        show(client.get(format!("{}/api/vehicles/{}", base_url, id)).send().await?).await?;
    }
    Ok(())
}

async fn create_lead(client: &Client, base_url: &str) -> Result<()> {
    let name = prompt("Nombre: ")?;
    let email = prompt("Email: ")?;
    let vehicle_id = prompt("Id del vehículo (opcional): ")?;
    let lead_type = prompt("Tipo [test_drive | inquiry | service] (opcional): ")?;

    let mut payload = json!({ "name": name, "email": email });
    if !vehicle_id.is_empty() {
        payload["vehicle_id"] = json!(vehicle_id);
    }
    if !lead_type.is_empty() {
        payload["type"] = json!(lead_type);
    }

    let response = client
        .post(format!("{}/api/leads", base_url))
        .json(&payload)
        .send()
        .await?;
    show(response).await
}
