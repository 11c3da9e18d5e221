//! Unpark command - release a vehicle and bill it at the current time

use anyhow::Result;
use parklot::domain::entities::current_timestamp;
use parklot::LicensePlate;

use super::CommandContext;

pub fn cmd_unpark(ctx: &CommandContext, plate: &str) -> Result<()> {
    let plate = LicensePlate::parse(plate)?;
    let mut service = ctx.open_service(ctx.ui.verbose > 0);
    let outcome = service.release(plate.as_str(), current_timestamp());
    super::finish(service, outcome).map(|_| ())
}
