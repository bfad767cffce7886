//! ritmoscopio: reproduce sesiones de baile grabadas (acelerómetro + lista de
//! movimientos) contra un backend de clasificación opaco y genera líneas de
//! tiempo de puntuación normalizadas, listas para comparar entre motores.

pub mod comparative;
pub mod direct_replay;
pub mod move_window;
pub mod scoring_backend;
pub mod session_loader;
pub mod signal_replay;
pub mod sim_backend;
pub mod timeline;
pub mod types;
