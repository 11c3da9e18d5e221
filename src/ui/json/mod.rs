//! NDJSON output for `--json` mode.
//!
//! Lot events stream through `parklot::infrastructure::JsonEventSink`;
//! this module covers what commands print directly (status, errors).

use std::io::{self, Write};

use parklot::LotSnapshot;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes a raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn status_event(snapshot: &LotSnapshot) -> serde_json::Value {
    serde_json::json!({
        "event": "status",
        "occupied": snapshot.occupied,
        "capacity": snapshot.capacity,
        "available": snapshot.available(),
        "total_revenue": snapshot.total_revenue,
        "vehicles": snapshot.vehicles,
    })
}

pub fn error_event(message: &str) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "message": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parklot::{LicensePlate, ParkingLot, Vehicle, VehicleCategory};

    #[test]
    fn write_event_is_one_line() {
        let mut buffer = Vec::new();
        write_event(&mut buffer, &error_event("boom")).unwrap();
        write_event(&mut buffer, &error_event("again")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["event"], "error");
        assert_eq!(parsed["message"], "boom");
    }

    #[test]
    fn status_event_lists_vehicles() {
        let mut lot = ParkingLot::new();
        lot.admit(Vehicle::restored(
            VehicleCategory::Truck,
            LicensePlate::parse("TR-1").unwrap(),
            1_700_000_000,
        ))
        .unwrap();

        let event = status_event(&lot.snapshot());
        assert_eq!(event["event"], "status");
        assert_eq!(event["occupied"], 1);
        assert_eq!(event["capacity"], 7);
        assert_eq!(event["available"], 6);
        assert_eq!(event["vehicles"][0]["plate"], "TR-1");
        assert_eq!(event["vehicles"][0]["category"], "Truck");
        assert_eq!(event["vehicles"][0]["admitted_at"], 1_700_000_000);
    }
}
