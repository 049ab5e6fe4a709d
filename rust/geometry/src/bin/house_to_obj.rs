// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Generate a house and write it as OBJ (plus tour JSON)
//!
//! Usage:
//!   house-to-obj [options]

use clap::Parser;
use house_tour_core::{generate_house, HouseSpecification, HouseType, LocationType};
use house_tour_geometry::export_house;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "house-to-obj", version, about = "Generate a furnished house layout and export it as OBJ")]
struct Args {
    /// Plot size in meters, "WIDTHxLENGTH" or a single side
    #[arg(long, default_value = "20x30")]
    plot: String,

    /// "single" or "double"
    #[arg(long, default_value = "single")]
    house_type: HouseType,

    #[arg(long, default_value_t = 2)]
    bedrooms: u32,

    #[arg(long, default_value_t = 1)]
    bathrooms: u32,

    #[arg(long, default_value_t = 1)]
    kitchens: u32,

    /// "city" (modern) or "village" (traditional)
    #[arg(long, default_value = "city")]
    location: LocationType,

    /// OBJ output path; the MTL file is written next to it
    #[arg(short, long, default_value = "house.obj")]
    output: PathBuf,

    /// Also write the layout and tour as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let spec = HouseSpecification {
        plot_size: args.plot.clone(),
        house_type: args.house_type,
        bedrooms: args.bedrooms,
        bathrooms: args.bathrooms,
        kitchens: args.kitchens,
        location_type: args.location,
        notes: String::new(),
    };

    let house = generate_house(&spec)?;
    let layout = &house.layout;

    println!(
        "House: {:.1}m x {:.1}m x {:.1}m, {} floor(s), {} style",
        layout.width, layout.length, layout.height, layout.floors, layout.style
    );
    println!("Rooms:");
    for room in &layout.rooms {
        println!(
            "  {:<14} at ({:6.2}, {:6.2})  {:5.2}m x {:5.2}m  {} pieces",
            room.name,
            room.position.x,
            room.position.z,
            room.dimensions.width,
            room.dimensions.length,
            room.furniture.len()
        );
    }
    println!(
        "Tour: {} waypoints, {:.0}s total",
        house.waypoints.len(),
        house.tour_duration()
    );

    let stats = export_house(layout, &args.output)?;
    println!(
        "Wrote {} ({} objects, {} materials, {} vertices, {} triangles)",
        args.output.display(),
        stats.objects,
        stats.materials,
        stats.vertices,
        stats.triangles
    );

    if let Some(json_path) = &args.json {
        fs::write(json_path, house.to_json_pretty()?)?;
        println!("Wrote {}", json_path.display());
    }

    Ok(())
}
