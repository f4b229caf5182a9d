use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

use persist_store::{persist_store, PersistorConfig};
use rehydrate::stubs::RecordingBus;

/// Pequeño menú interactivo para ejercitar la coordinación de
/// rehidratación usando el bus en memoria de `rehydrate` y el handle
/// proporcionado por `persist-store`.
///
/// Opciones soportadas:
/// 1) Ver estado (registry + bootstrapped)
/// 2) Registrar key pendiente
/// 3) Rehidratar key (payload JSON o error)
/// 4) Pausar / reanudar persistencia
/// 5) Flush / Purge
/// 6) Ver acciones publicadas
/// 7) Salir
fn main() -> Result<(), Box<dyn Error>> {
    // Inicializar bus y persistor (la config se lee del entorno)
    let bus = Arc::new(RecordingBus::new());
    let config = PersistorConfig::from_env();
    let persistor = persist_store(bus.clone(),
                                  config,
                                  Some(Box::new(|| println!(">> bootstrap: todos los slices rehidratados"))))
        .map_err(|e| Box::new(e) as Box<dyn Error>)?;
    println!("Persistor {} iniciado en {}", persistor.id(), persistor.started_at());

    loop {
        println!("\n== Persistor CLI menu ==");
        println!("1) Ver estado (registry + bootstrapped)");
        println!("2) Registrar key pendiente");
        println!("3) Rehidratar key");
        println!("4) Pausar persistencia");
        println!("5) Reanudar persistencia (persist)");
        println!("6) Flush");
        println!("7) Purge");
        println!("8) Ver acciones publicadas");
        println!("9) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        match choice.trim() {
            "1" => match persistor.get_state() {
                Ok(state) => {
                    println!("bootstrapped: {}", state.bootstrapped);
                    println!("pendientes ({}):", state.registry.len());
                    for key in state.registry {
                        println!("  - {}", key);
                    }
                }
                Err(e) => eprintln!("Error leyendo estado: {}", e),
            },
            "2" => {
                let key = prompt("Key del slice: ")?;
                let key = key.trim();
                if key.is_empty() {
                    eprintln!("Key vacía; ignorado");
                    continue;
                }
                match persistor.register(key) {
                    Ok(()) => println!("Key '{}' registrada", key),
                    Err(e) => eprintln!("Error registrando: {}", e),
                }
            }
            "3" => {
                let key = prompt("Key del slice: ")?;
                let key = key.trim().to_string();
                let raw = prompt("Payload JSON (enter para error de recarga): ")?;
                let (payload, err) = if raw.trim().is_empty() {
                    let reason = prompt("Motivo del error: ")?;
                    (None, Some(reason.trim().to_string()))
                } else {
                    match serde_json::from_str(raw.trim()) {
                        Ok(value) => (Some(value), None),
                        Err(e) => {
                            eprintln!("JSON inválido: {}", e);
                            continue;
                        }
                    }
                };
                match persistor.rehydrate(&key, payload, err) {
                    Ok(()) => println!("Rehidratación de '{}' entregada", key),
                    Err(e) => eprintln!("Error rehidratando: {}", e),
                }
            }
            "4" => match persistor.pause() {
                Ok(()) => println!("Persistencia pausada"),
                Err(e) => eprintln!("Error pausando: {}", e),
            },
            "5" => match persistor.persist() {
                Ok(()) => println!("Persistencia reanudada"),
                Err(e) => eprintln!("Error reanudando: {}", e),
            },
            "6" => match persistor.flush() {
                Ok(()) => println!("Flush publicado"),
                Err(e) => eprintln!("Error en flush: {}", e),
            },
            "7" => match persistor.purge() {
                Ok(()) => println!("Purge publicado"),
                Err(e) => eprintln!("Error en purge: {}", e),
            },
            "8" => {
                let records = bus.records();
                println!("\nCUANDO                          | ACCION");
                println!("------------------------------------------------");
                for r in records {
                    println!("{} | {}", r.created_at, r.action.action_type());
                }
            }
            "9" => {
                println!("Saliendo...");
                break;
            }
            other => eprintln!("Opción no reconocida: {}", other),
        }
    }

    Ok(())
}

/// Lee una línea de stdin mostrando antes el texto dado.
fn prompt(text: &str) -> Result<String, Box<dyn Error>> {
    print!("{}", text);
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
