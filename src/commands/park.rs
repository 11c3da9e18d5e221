//! Park command

use anyhow::Result;
use parklot::{LicensePlate, VehicleCategory};

use super::CommandContext;

pub fn cmd_park(ctx: &CommandContext, category: VehicleCategory, plate: &str) -> Result<()> {
    let plate = LicensePlate::parse(plate)?;
    let mut service = ctx.open_service(ctx.ui.verbose > 0);
    let outcome = service.park(category, plate);
    super::finish(service, outcome)
}
