//! Interactive menu selections

use anyhow::Result;
use dialoguer::{Input, Select};

use parklot::domain::entities::current_timestamp;
use parklot::{LicensePlate, LotEventSink, ParkingService, Timestamp, VehicleCategory, VehicleRepository};

use super::super::CliParkingService;
use crate::ui::context::UiContext;
use crate::ui::theme::ParklotTheme;
use crate::ui::views::status::StatusView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Park(VehicleCategory),
    Unpark,
    Status,
    Exit,
}

impl MenuAction {
    /// Menu entries, in display order
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Park(VehicleCategory::Car),
        MenuAction::Park(VehicleCategory::Truck),
        MenuAction::Park(VehicleCategory::Motorbike),
        MenuAction::Unpark,
        MenuAction::Status,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Park(VehicleCategory::Car) => "Park Car",
            MenuAction::Park(VehicleCategory::Truck) => "Park Truck",
            MenuAction::Park(VehicleCategory::Motorbike) => "Park Motorbike",
            MenuAction::Unpark => "Unpark Vehicle (Pay & Exit)",
            MenuAction::Status => "Display Status",
            MenuAction::Exit => "Exit & Save",
        }
    }

    fn plate_prompt(&self) -> Option<&'static str> {
        match self {
            MenuAction::Park(_) => Some("Enter License Plate"),
            MenuAction::Unpark => Some("Enter License Plate to Unpark"),
            MenuAction::Status | MenuAction::Exit => None,
        }
    }
}

/// What happened during one interactive session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTally {
    pub parked: usize,
    pub released: usize,
    pub revenue: f64,
}

/// Carry out a menu action that needs a plate.
///
/// Lot-full and unknown-plate outcomes were already shown by the event
/// sink, so they only leave the tally untouched.
pub fn apply_action<R, E>(
    service: &mut ParkingService<R, E>,
    action: MenuAction,
    plate: &LicensePlate,
    now: Timestamp,
    tally: &mut SessionTally,
) where
    R: VehicleRepository,
    E: LotEventSink,
{
    match action {
        MenuAction::Park(category) => {
            if service.park(category, plate.clone()).is_ok() {
                tally.parked += 1;
            }
        }
        MenuAction::Unpark => {
            if let Ok(receipt) = service.release(plate.as_str(), now) {
                tally.released += 1;
                tally.revenue += receipt.fee;
            }
        }
        MenuAction::Status | MenuAction::Exit => {}
    }
}

pub fn run_menu(service: &mut CliParkingService, ui: &UiContext) -> Result<SessionTally> {
    let theme = ParklotTheme::new(ui.color, ui.unicode);
    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();
    let mut tally = SessionTally::default();

    loop {
        println!();
        let selection = Select::with_theme(&theme)
            .with_prompt("Select an option")
            .items(&labels)
            .default(0)
            .interact();
        let action = match selection {
            Ok(index) => MenuAction::ALL[index],
            Err(err) if is_interrupted(&err) => return Ok(tally),
            Err(err) => return Err(err.into()),
        };

        if let Some(prompt) = action.plate_prompt() {
            let Some(plate) = prompt_plate(&theme, prompt)? else {
                return Ok(tally);
            };
            apply_action(service, action, &plate, current_timestamp(), &mut tally);
            continue;
        }

        match action {
            MenuAction::Status => print!(
                "{}",
                StatusView::new(&service.status()).render(ui.color, ui.unicode)
            ),
            _ => return Ok(tally),
        }
    }
}

/// Ctrl-C at a prompt ends the session like "Exit & Save"
pub(crate) fn is_interrupted(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted)
}

/// `None` when the prompt was interrupted
fn prompt_plate(theme: &ParklotTheme, prompt: &str) -> Result<Option<LicensePlate>> {
    let input: dialoguer::Result<String> = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            LicensePlate::parse(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text();
    match input {
        Ok(raw) => Ok(Some(LicensePlate::parse(&raw)?)),
        Err(err) if is_interrupted(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
