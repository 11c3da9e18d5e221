//! ParkingService - the lot manager
//!
//! Persistence happens at exactly two points: `open` (load) and
//! `shutdown`/`save` (write). Everything in between is in memory.

use std::path::{Path, PathBuf};

use crate::domain::entities::{LotSnapshot, ParkingLot, Receipt, Timestamp, Vehicle};
use crate::domain::ports::{LotEvent, LotEventSink, SkippedLine, VehicleRepository};
use crate::domain::value_objects::{LicensePlate, VehicleCategory};
use crate::error::{ParkingError, ParkingResult};

/// What happened while restoring the parked set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Data file existed
    pub source_found: bool,
    /// Vehicles placed back in the lot
    pub restored: usize,
    /// Malformed or unrecognized lines
    pub skipped: Vec<SkippedLine>,
    /// Well-formed records that did not fit in the lot
    pub dropped: usize,
    /// Read failure other than "file missing"; the lot starts empty
    pub read_error: Option<String>,
}

/// Lot manager, parameterized by its storage and event ports
pub struct ParkingService<R, E>
where
    R: VehicleRepository,
    E: LotEventSink,
{
    repo: R,
    events: E,
    data_path: PathBuf,
    lot: ParkingLot,
    load_report: LoadReport,
}

impl<R, E> ParkingService<R, E>
where
    R: VehicleRepository,
    E: LotEventSink,
{
    /// Create the service and restore the parked set from `data_path`.
    ///
    /// Loading never fails: a missing file is an empty lot, bad lines are
    /// skipped, and unreadable files are logged and treated as empty.
    pub fn open(repo: R, data_path: impl Into<PathBuf>, events: E) -> Self {
        let mut service = Self {
            repo,
            events,
            data_path: data_path.into(),
            lot: ParkingLot::new(),
            load_report: LoadReport::default(),
        };
        service.load_data();
        service
    }

    fn load_data(&mut self) {
        let result = match self.repo.load(&self.data_path) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("starting with an empty lot: {}", err);
                self.load_report.read_error = Some(err.to_string());
                return;
            }
        };

        self.load_report.source_found = result.source_found;
        for skipped in &result.skipped {
            log::warn!(
                "{}:{}: skipping stored line '{}' ({})",
                self.data_path.display(),
                skipped.line,
                skipped.content,
                skipped.reason
            );
        }
        self.load_report.skipped = result.skipped;

        for vehicle in result.vehicles {
            let plate = vehicle.plate().to_string();
            match self.lot.admit(vehicle) {
                Ok(()) => self.load_report.restored += 1,
                Err(_) => {
                    log::warn!(
                        "{}: lot already full, dropping stored vehicle {}",
                        self.data_path.display(),
                        plate
                    );
                    self.load_report.dropped += 1;
                }
            }
        }

        if result.source_found {
            log::debug!(
                "restored {} vehicle(s) from {}",
                self.load_report.restored,
                self.data_path.display()
            );
            self.events.on_event(LotEvent::Loaded {
                path: self.data_path.clone(),
                restored: self.load_report.restored,
                skipped: self.load_report.skipped.len(),
            });
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Park a new vehicle arriving now
    pub fn park(&mut self, category: VehicleCategory, plate: LicensePlate) -> ParkingResult<()> {
        self.admit(Vehicle::new(category, plate))
    }

    /// Admit a vehicle record. A full lot discards it.
    pub fn admit(&mut self, vehicle: Vehicle) -> ParkingResult<()> {
        let category = vehicle.category();
        let plate = vehicle.plate().clone();

        match self.lot.admit(vehicle) {
            Ok(()) => {
                log::info!("admitted {} {}", category, plate);
                self.events
                    .on_event(LotEvent::Admitted { category, plate });
                Ok(())
            }
            Err(err) => {
                log::info!("rejected {} {}: lot full", category, plate);
                self.events
                    .on_event(LotEvent::Rejected { category, plate });
                Err(err)
            }
        }
    }

    /// Release the first vehicle with `plate`, billing it at `now`
    pub fn release(&mut self, plate: &str, now: Timestamp) -> ParkingResult<Receipt> {
        match self.lot.release(plate, now) {
            Ok(receipt) => {
                log::info!(
                    "released {} {} (fee {:.2})",
                    receipt.category,
                    receipt.plate,
                    receipt.fee
                );
                self.events.on_event(LotEvent::Released(receipt.clone()));
                Ok(receipt)
            }
            Err(err) => {
                if let ParkingError::NotFound { plate } = &err {
                    log::info!("release requested for unknown plate {}", plate);
                    self.events.on_event(LotEvent::NotFound {
                        plate: plate.clone(),
                    });
                }
                Err(err)
            }
        }
    }

    pub fn status(&self) -> LotSnapshot {
        self.lot.snapshot()
    }

    /// Write the parked set to the data file.
    ///
    /// A failure leaves the in-memory lot untouched. A data file that existed
    /// but could not be read at startup is never overwritten.
    pub fn save(&self) -> ParkingResult<()> {
        if self.load_report.read_error.is_some() {
            return Err(ParkingError::UnreadSource {
                path: self.data_path.clone(),
            });
        }
        self.repo.save(self.lot.vehicles(), &self.data_path)?;
        log::debug!(
            "saved {} vehicle(s) to {}",
            self.lot.occupied(),
            self.data_path.display()
        );
        self.events.on_event(LotEvent::Saved {
            path: self.data_path.clone(),
            count: self.lot.occupied(),
        });
        Ok(())
    }

    /// Save, then release every in-memory record
    pub fn shutdown(mut self) -> ParkingResult<()> {
        let saved = self.save();
        if let Err(err) = &saved {
            log::error!("changes since startup are lost: {}", err);
        }
        self.lot.clear();
        saved
    }
}
