/*
ritmoscopio — reproduce una sesión de baile grabada contra un backend de
puntuación y genera los JSON comparativos en Comparatives/<mapa>/.

Variantes:
  JDNEXT  copia de referencia de la puntuación grabada
  JDNOW   backend de puntaje directo (rating + total por movimiento)
  UAF     backend de señales agregadas (19 canales por movimiento)

Los backends incluidos son sintéticos y deterministas; el contrato es el
mismo que el de los motores nativos, así que los comparativos sirven para
verificar grabaciones y el pipeline de normalización.

Para generar los tres comparativos:
    ritmoscopio sesion.json
*/

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use ritmoscopio::comparative::{
    comparative_from_reference, comparative_from_timeline, write_comparative,
};
use ritmoscopio::direct_replay::replay_direct;
use ritmoscopio::session_loader::load_session;
use ritmoscopio::signal_replay::replay_signals;
use ritmoscopio::sim_backend::{SimDirectBackend, SimSignalBackend};
use ritmoscopio::types::ComparativeType;

struct ReplayOptions {
    reference: bool,
    direct: bool,
    aggregate: bool,
    out_dir: PathBuf,
}

fn parse_args() -> Result<(PathBuf, ReplayOptions)> {
    let mut reference = false;
    let mut direct = false;
    let mut aggregate = false;
    let mut out_dir = PathBuf::from(".");
    let mut session_path: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--referencia" => reference = true,
            "--directo" => direct = true,
            "--agregado" => aggregate = true,
            "--salida" => {
                out_dir = PathBuf::from(
                    args.next()
                        .ok_or_else(|| anyhow!("--salida requiere un directorio"))?,
                );
            }
            _ => {
                if session_path.is_some() {
                    bail!(
                        "Uso: ritmoscopio [--referencia] [--directo] [--agregado] \
                         [--salida <dir>] <sesion.json>"
                    );
                }
                session_path = Some(PathBuf::from(arg));
            }
        }
    }

    let session_path =
        session_path.ok_or_else(|| anyhow!("Debes especificar un archivo de sesión JSON"))?;

    // Sin banderas de variante se generan las tres
    if !reference && !direct && !aggregate {
        reference = true;
        direct = true;
        aggregate = true;
    }

    Ok((
        session_path,
        ReplayOptions {
            reference,
            direct,
            aggregate,
            out_dir,
        },
    ))
}

fn main() -> Result<()> {
    let (session_path, opts) = parse_args()?;
    println!("🎞️  Reproduciendo sesión desde {:?}", session_path);

    let session = load_session(&session_path)
        .with_context(|| format!("No se pudo cargar la sesión {:?}", session_path))?;
    let (gold_count, move_count) = session.category_counts();
    println!(
        "[SESION] mapa: {} | movimientos: {} dorados + {} regulares | muestras: {}",
        session.map_name,
        gold_count,
        move_count,
        session.acc_data.len()
    );

    if opts.reference {
        let comparative =
            comparative_from_reference(&session.map_name, session.recorded_score.clone());
        let path = write_comparative(&opts.out_dir, &comparative)?;
        println!("📄 Comparativo {} escrito en {:?}", comparative.comparative_type.tag(), path);
    }

    if opts.direct {
        let mut backend = SimDirectBackend::new();
        let timeline = replay_direct(&session, &mut backend)
            .context("La reproducción con el backend directo falló")?;
        println!("🏁 Puntuación final JDNOW: {}", timeline.final_score());
        let comparative =
            comparative_from_timeline(&session.map_name, ComparativeType::Jdnow, timeline)?;
        let path = write_comparative(&opts.out_dir, &comparative)?;
        println!("📄 Comparativo JDNOW escrito en {:?}", path);
    }

    if opts.aggregate {
        let mut backend = SimSignalBackend::new();
        let timeline = replay_signals(&session, &mut backend)
            .context("La reproducción con el backend de señales falló")?;
        println!("🏁 Puntuación final UAF: {}", timeline.final_score());
        let comparative =
            comparative_from_timeline(&session.map_name, ComparativeType::Uaf, timeline)?;
        let path = write_comparative(&opts.out_dir, &comparative)?;
        println!("📄 Comparativo UAF escrito en {:?}", path);
    }

    Ok(())
}
