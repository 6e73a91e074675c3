// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Example: hide an address or private key in a PNG, or read one back.
//!
//! Usage: `cargo run --example stash -- <cover.png> <secret> [out.png]`
//!        `cargo run --example stash -- --decode <stego.png>`
//!        `cargo run --example stash -- --capacity <cover.png>`
//!
//! Set `RUST_LOG=debug` to see frame layout decisions.
use std::fs;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: stash <cover.png> <secret> [out.png]");
        eprintln!("       stash --decode <stego.png>");
        eprintln!("       stash --capacity <cover.png>");
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "--decode" => decode(&args[2]),
        "--capacity" => capacity(&args[2]),
        cover => encode(cover, &args[2], args.get(3).map(String::as_str)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn encode(cover_path: &str, secret: &str, out_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let cover = fs::read(cover_path)?;
    let stego = dogestash_core::encode_image(&cover, secret)?;

    let out_path = out_path
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{}_stash.png", cover_path.trim_end_matches(".png")));
    fs::write(&out_path, &stego)?;
    println!("Stego image written to: {out_path}");
    println!("Cover: {} bytes, Stego: {} bytes", cover.len(), stego.len());
    Ok(())
}

fn decode(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let stego = fs::read(path)?;
    let secret = dogestash_core::decode_image(&stego)?;
    let label = if secret.is_private_key() { "Private key" } else { "Address" };
    println!("{label} ({:?} frame): {}", secret.format, secret.as_str());
    Ok(())
}

fn capacity(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cover = fs::read(path)?;
    let bytes = dogestash_core::image_capacity(&cover)?;
    println!("Capacity: {bytes} payload bytes");
    Ok(())
}
