//! Linux sysfs thermal zone reader.

use std::fs;
use std::path::{Path, PathBuf};

use super::ThermalSource;

/// Thermal zone exposed by the kernel on most single-board computers.
pub const DEFAULT_ZONE: &str = "/sys/class/thermal/thermal_zone0";

// Some kernels report plain degrees, others milli-degrees; anything above
// this cutoff is taken as milli-degrees.
const MILLIDEGREE_CUTOFF: f64 = 85.0;

/// Reads the current and trip-point temperatures of one sysfs thermal zone.
///
/// Any I/O or parse failure is logged and surfaces as an absent reading.
#[derive(Debug, Clone)]
pub struct SysfsThermalZone {
    zone: PathBuf,
}

impl SysfsThermalZone {
    /// Reader over the default zone, [`DEFAULT_ZONE`].
    pub fn new() -> Self {
        Self::at(DEFAULT_ZONE)
    }

    /// Reader over a specific zone directory.
    pub fn at(zone: impl Into<PathBuf>) -> Self {
        Self { zone: zone.into() }
    }

    /// The zone directory this reader samples.
    pub fn zone(&self) -> &Path {
        &self.zone
    }

    fn read_value(&self, file: &str) -> Option<f64> {
        let path = self.zone.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("failed to read {}: {}", path.display(), err);
                return None;
            },
        };
        let value = match content.trim().parse::<f64>() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("unparsable reading in {}: {}", path.display(), err);
                return None;
            },
        };
        if value > MILLIDEGREE_CUTOFF {
            Some(value / 1000.0)
        } else {
            Some(value)
        }
    }
}

impl Default for SysfsThermalZone {
    fn default() -> Self {
        Self::new()
    }
}

impl ThermalSource for SysfsThermalZone {
    fn read_temperature(&self) -> Option<f64> {
        self.read_value("temp")
    }

    fn read_max_temperature(&self) -> Option<f64> {
        self.read_value("trip_point_0_temp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct ZoneDir(PathBuf);

    impl ZoneDir {
        fn create(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("thermofan-{}-{}", name, std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            ZoneDir(dir)
        }

        fn write(&self, file: &str, content: &str) {
            fs::write(self.0.join(file), content).unwrap();
        }
    }

    impl Drop for ZoneDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn reads_millidegree_zone() {
        let dir = ZoneDir::create("milli");
        dir.write("temp", "48650\n");
        dir.write("trip_point_0_temp", "90000\n");

        let zone = SysfsThermalZone::at(&dir.0);
        assert_eq!(zone.read_temperature(), Some(48.65));
        assert_eq!(zone.read_max_temperature(), Some(90.0));
    }

    #[test]
    fn reads_plain_degree_zone() {
        let dir = ZoneDir::create("plain");
        dir.write("temp", "47.8\n");

        let zone = SysfsThermalZone::at(&dir.0);
        assert_eq!(zone.read_temperature(), Some(47.8));
    }

    #[test]
    fn missing_file_degrades_to_absent() {
        let dir = ZoneDir::create("missing");
        let zone = SysfsThermalZone::at(&dir.0);
        assert_eq!(zone.read_temperature(), None);
    }

    #[test]
    fn garbage_content_degrades_to_absent() {
        let dir = ZoneDir::create("garbage");
        dir.write("temp", "not-a-number\n");

        let zone = SysfsThermalZone::at(&dir.0);
        assert_eq!(zone.read_temperature(), None);
    }
}
