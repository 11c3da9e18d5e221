use parklot::ParkingError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Lot-full and unknown-plate outcomes were already printed by the event
/// sink; the command only needs to exit non-zero.
pub fn already_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ParkingError>()
        .is_some_and(ParkingError::is_recoverable)
}

// ParkingError messages already name their cause
fn message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ParkingError>() {
        Some(parking) => parking.to_string(),
        None => format!("{:#}", err),
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(message(err)).render(supports_color)
    );

    let hint = match err.downcast_ref::<ParkingError>() {
        Some(ParkingError::InvalidPlate { .. }) => {
            Some("License plates are a single word, e.g. AB-123")
        }
        Some(ParkingError::InvalidCategory { .. }) => Some("Categories are Car, Truck or Motorbike"),
        Some(ParkingError::Storage { .. } | ParkingError::UnreadSource { .. }) => {
            Some("Check the data file location (--data-file or PARKLOT_DATA_FILE)")
        }
        _ => None,
    };
    if let Some(hint) = hint {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(crate::ui::json::error_event(&message(err)));
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lot_full_and_not_found_are_already_reported() {
        let full = anyhow::Error::new(ParkingError::LotFull {
            plate: "X".to_string(),
        });
        let missing = anyhow::Error::new(ParkingError::NotFound {
            plate: "X".to_string(),
        });

        assert!(already_reported(&full));
        assert!(already_reported(&missing));
        assert!(!already_reported(&anyhow::anyhow!("other")));
    }

    #[test]
    fn storage_error_carries_hint() {
        let err = anyhow::Error::new(ParkingError::Storage {
            path: PathBuf::from("/nope/lot.txt"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });

        let out = format_error(&err, false, false);
        assert!(out.starts_with("[FAIL] could not access data file /nope/lot.txt"));
        assert!(out.contains("[>] Check the data file location"));
    }

    #[test]
    fn invalid_plate_hint() {
        let err = anyhow::Error::new(ParkingError::InvalidPlate {
            value: "A B".to_string(),
        });
        assert!(format_error(&err, false, true).contains("single word"));
    }
}
