//! Drive Cycle
//!
//! Builds an off-road pickup, shows that the ported transition table only
//! allows parking, then drives a full cycle under the extended table.
//!
//! Run with: RUST_LOG=pickup_truck=debug cargo run --example drive_cycle

use pickup_truck::options::{AvailablePackages, EngineType, TransmissionType, Trim};
use pickup_truck::{TransitionTable, TruckBuilder};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    init_logging();

    println!("=== Drive Cycle ===\n");

    let mut truck = TruckBuilder::light_duty_truck()
        .with_engine(EngineType::V6)
        .and_transmission(TransmissionType::Manual)
        .and_trim_option(Trim::ExtendedCab)
        .and_package(AvailablePackages::OffRoad)
        .build();

    println!("Built truck: {:?}", truck.config());
    println!("Initial state: {}\n", truck.drive_state());

    println!("Ported table:");
    match truck.park() {
        Ok(state) => println!("  park    -> {state}"),
        Err(err) => println!("  park    -> {err}"),
    }
    match truck.drive() {
        Ok(state) => println!("  drive   -> {state}"),
        Err(err) => println!("  drive   -> {err}"),
    }

    let mut truck = truck.with_transitions(TransitionTable::extended());

    println!("\nExtended table:");
    let steps = [
        ("neutral", truck.neutral()),
        ("drive", truck.drive()),
        ("accelerate", truck.accelerate(45)),
        ("reverse", truck.reverse()),
        ("brake", truck.apply_brake()),
        ("park", truck.park()),
    ];
    for (name, result) in steps {
        match result {
            Ok(state) => println!("  {name:<10} -> {state}"),
            Err(err) => println!("  {name:<10} -> {err}"),
        }
    }

    println!("\nPath taken:");
    for state in truck.history().path() {
        println!("  {state}");
    }
    if let Some(duration) = truck.history().duration() {
        println!("Elapsed: {duration:?}");
    }

    println!("\n=== Example Complete ===");
}
