//! Decode a DXF file and write its features back out.
//!
//! Usage: dxf_roundtrip <input.dxf> <output.dxf> [precision]

use anyhow::{bail, Context};
use dxf_features::{DxfReader, DxfWriter, EncodeOptions, NotificationType};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        bail!("usage: {} <input.dxf> <output.dxf> [precision]", args[0]);
    }
    let precision = match args.get(3) {
        Some(p) => p
            .parse::<usize>()
            .with_context(|| format!("invalid precision: {}", p))?,
        None => dxf_features::io::dxf::DEFAULT_PRECISION,
    };

    let doc = DxfReader::from_file(&args[1])
        .and_then(|reader| reader.read())
        .with_context(|| format!("failed to read {}", args[1]))?;

    log::info!(
        "{}: version {}, {} features, {} table kinds",
        args[1],
        doc.version().unwrap_or("unknown"),
        doc.feature_count(),
        doc.tables.kind_count()
    );
    for notification in doc.notifications.iter() {
        match notification.notification_type {
            NotificationType::Warning => log::warn!("{}", notification),
            _ => log::info!("{}", notification),
        }
    }
    if !doc.notifications.is_empty() {
        log::info!("notifications: {}", doc.notifications.summary());
    }

    let options = EncodeOptions::from_features(doc.features()).with_precision(precision);
    DxfWriter::new(doc.features())
        .with_options(options)
        .write_to_file(&args[2])
        .with_context(|| format!("failed to write {}", args[2]))?;

    println!(
        "{} features written to {} ({} skipped or dropped)",
        doc.feature_count(),
        args[2],
        doc.notifications.data_loss_count()
    );
    Ok(())
}
