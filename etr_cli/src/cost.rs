use clap::Args;
use etr_pricing::pricing::PricingEngine;
use etr_pricing::vehicle_rate::VehicleClass;

#[derive(Args)]
pub struct CostArgs {
    /// Name of the entry location
    #[arg(short, long)]
    pub from: String,

    /// Name of the exit location
    #[arg(short, long)]
    pub to: String,

    /// Adds the charges of this vehicle class (light, heavy, multi)
    #[arg(short, long)]
    pub vehicle: Option<VehicleClass>,
}

pub fn run(engine: &PricingEngine, args: CostArgs) -> anyhow::Result<()> {
    println!("{}", render(engine, &args)?);

    Ok(())
}

fn render(engine: &PricingEngine, args: &CostArgs) -> anyhow::Result<String> {
    let trip_cost = engine.cost_of_trip(&args.from, &args.to, args.vehicle)?;

    Ok(serde_json::to_string_pretty(&trip_cost)?)
}
