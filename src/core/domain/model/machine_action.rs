//! Actions that can be requested against a machine through its BMC.

use crate::core::domain::error::{PbnjError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A power action. Wire codes match the service's `PowerAction` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    Unspecified,
    On,
    Off,
    HardOff,
    Cycle,
    Reset,
    Status,
}

impl PowerAction {
    pub fn code(self) -> i32 {
        match self {
            PowerAction::Unspecified => 0,
            PowerAction::On => 1,
            PowerAction::Off => 2,
            PowerAction::HardOff => 3,
            PowerAction::Cycle => 4,
            PowerAction::Reset => 5,
            PowerAction::Status => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PowerAction::Unspecified => "unspecified",
            PowerAction::On => "on",
            PowerAction::Off => "off",
            PowerAction::HardOff => "hardoff",
            PowerAction::Cycle => "cycle",
            PowerAction::Reset => "reset",
            PowerAction::Status => "status",
        }
    }
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerAction {
    type Err = PbnjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unspecified" => Ok(PowerAction::Unspecified),
            "on" => Ok(PowerAction::On),
            "off" => Ok(PowerAction::Off),
            "hardoff" | "hard-off" => Ok(PowerAction::HardOff),
            "cycle" => Ok(PowerAction::Cycle),
            "reset" => Ok(PowerAction::Reset),
            "status" => Ok(PowerAction::Status),
            other => Err(ValidationError::Field {
                field: "power_action".to_string(),
                message: format!("Unknown power action '{}'", other),
            }
            .into()),
        }
    }
}

/// Optional tuning forwarded with a power request, in whole seconds.
/// Zero leaves the server default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerOptions {
    /// How long a graceful power-off may take before the server forces it.
    pub soft_timeout_secs: u32,
    /// How long a power cycle keeps the machine off.
    pub off_duration_secs: u32,
}

/// The next boot device. Wire codes match the service's `BootDevice` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootDevice {
    Unspecified,
    None,
    Bios,
    Disk,
    Cdrom,
    Pxe,
}

impl BootDevice {
    pub fn code(self) -> i32 {
        match self {
            BootDevice::Unspecified => 0,
            BootDevice::None => 1,
            BootDevice::Bios => 2,
            BootDevice::Disk => 3,
            BootDevice::Cdrom => 4,
            BootDevice::Pxe => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BootDevice::Unspecified => "unspecified",
            BootDevice::None => "none",
            BootDevice::Bios => "bios",
            BootDevice::Disk => "disk",
            BootDevice::Cdrom => "cdrom",
            BootDevice::Pxe => "pxe",
        }
    }
}

impl fmt::Display for BootDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BootDevice {
    type Err = PbnjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unspecified" => Ok(BootDevice::Unspecified),
            "none" => Ok(BootDevice::None),
            "bios" => Ok(BootDevice::Bios),
            "disk" => Ok(BootDevice::Disk),
            "cdrom" => Ok(BootDevice::Cdrom),
            "pxe" => Ok(BootDevice::Pxe),
            other => Err(ValidationError::Field {
                field: "boot_device".to_string(),
                message: format!("Unknown boot device '{}'", other),
            }
            .into()),
        }
    }
}

/// Boot-device change parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootOptions {
    pub device: BootDevice,
    /// Keep the device for all future boots rather than the next one only.
    pub persistent: bool,
    pub efi_boot: bool,
}

impl BootOptions {
    pub fn once(device: BootDevice) -> Self {
        Self {
            device,
            persistent: false,
            efi_boot: false,
        }
    }
}
