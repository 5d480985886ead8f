//! The fields of each kind of resource.

use super::{InterfaceType, ResourceClass};

/// The secondary address of a GPIB instrument that has none.
pub const NO_SECONDARY_ADDRESS: &str = "65535";

/// The LAN device name used when a TCP/IP instrument does not specify one.
pub const DEFAULT_LAN_DEVICE_NAME: &str = "inst0";

/// The board used when a resource name does not specify one.
pub const DEFAULT_BOARD: &str = "0";

/// The USB interface number used when a USB resource name does not specify one.
pub const DEFAULT_USB_INTERFACE_NUMBER: &str = "0";

/// A named field of a resource name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Field {
	/// The board number, following the interface type.
	Board,
	/// A GPIB primary address.
	PrimaryAddress,
	/// A GPIB secondary address.
	SecondaryAddress,
	/// A TCP/IP host name or IP address.
	HostAddress,
	/// A VXI-11 LAN device name.
	LanDeviceName,
	/// A TCP port.
	Port,
	/// A USB manufacturer ID.
	ManufacturerId,
	/// A USB model code.
	ModelCode,
	/// A USB serial number.
	SerialNumber,
	/// A USB interface number.
	UsbInterfaceNumber,
}

impl Field {
	/// The largest value the field may take, if it is numeric and bounded.
	pub(crate) const fn max_value(self) -> Option<u32> {
		match self {
			Field::PrimaryAddress | Field::SecondaryAddress => Some(30),
			Field::Port => Some(65_535),
			Field::UsbInterfaceNumber => Some(254),
			_ => None,
		}
	}
}

impl std::fmt::Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Field::Board => "board",
			Field::PrimaryAddress => "primary address",
			Field::SecondaryAddress => "secondary address",
			Field::HostAddress => "host address",
			Field::LanDeviceName => "LAN device name",
			Field::Port => "port",
			Field::ManufacturerId => "manufacturer ID",
			Field::ModelCode => "model code",
			Field::SerialNumber => "serial number",
			Field::UsbInterfaceNumber => "USB interface number",
		})
	}
}

/// Implement a `&str` getter for each of the listed fields.
macro_rules! impl_field_getters {
	(
		$name:ident {
			$(
				$(#[$attr:meta])*
				$field:ident
			),+
			$(,)?
		}
	) => {
		impl $name {
			$(
				$(#[$attr])*
				pub fn $field(&self) -> &str {
					&self.$field
				}
			)+
		}
	};
}

/// The fields of a serial instrument (`ASRL<board>::INSTR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asrl {
	pub(super) board: Box<str>,
}

impl_field_getters! {
	Asrl {
		/// The serial port number.
		board,
	}
}

/// The fields of a GPIB instrument
/// (`GPIB<board>::<primary address>::<secondary address>::INSTR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GpibInstr {
	pub(super) board: Box<str>,
	pub(super) primary_address: Box<str>,
	pub(super) secondary_address: Box<str>,
}

impl_field_getters! {
	GpibInstr {
		/// The GPIB controller number.
		board,
		/// The primary address of the device on the bus.
		primary_address,
		/// The secondary address of the device on the bus.
		///
		/// This is [`NO_SECONDARY_ADDRESS`] if the resource name did not
		/// specify one.
		secondary_address,
	}
}

impl GpibInstr {
	/// Whether the device has a secondary address.
	pub fn has_secondary_address(&self) -> bool {
		&*self.secondary_address != NO_SECONDARY_ADDRESS
	}
}

/// The fields of a GPIB interface (`GPIB<board>::INTFC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GpibIntfc {
	pub(super) board: Box<str>,
}

impl_field_getters! {
	GpibIntfc {
		/// The GPIB controller number.
		board,
	}
}

/// The fields of a TCP/IP instrument
/// (`TCPIP<board>::<host address>::<LAN device name>::INSTR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TcpipInstr {
	pub(super) board: Box<str>,
	pub(super) host_address: Box<str>,
	pub(super) lan_device_name: Box<str>,
}

impl_field_getters! {
	TcpipInstr {
		/// The network interface number.
		board,
		/// The host name or IP address of the device, as written.
		host_address,
		/// The name of the device on the host.
		lan_device_name,
	}
}

/// The fields of a TCP/IP socket (`TCPIP<board>::<host address>::<port>::SOCKET`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TcpipSocket {
	pub(super) board: Box<str>,
	pub(super) host_address: Box<str>,
	pub(super) port: Box<str>,
}

impl_field_getters! {
	TcpipSocket {
		/// The network interface number.
		board,
		/// The host name or IP address of the device, as written.
		host_address,
		/// The TCP port.
		port,
	}
}

/// The fields of a USB instrument or raw USB device
/// (`USB<board>::<manufacturer ID>::<model code>::<serial number>::<USB interface number>::INSTR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Usb {
	pub(super) board: Box<str>,
	pub(super) manufacturer_id: Box<str>,
	pub(super) model_code: Box<str>,
	pub(super) serial_number: Box<str>,
	pub(super) usb_interface_number: Box<str>,
}

impl_field_getters! {
	Usb {
		/// The USB controller number.
		board,
		/// The manufacturer ID, as written (often hexadecimal, e.g. `0x1234`).
		manufacturer_id,
		/// The model code, as written.
		model_code,
		/// The serial number.
		serial_number,
		/// The USB interface number.
		usb_interface_number,
	}
}

/// The address of a resource, one variant per supported interface type and
/// resource class.
///
/// Each variant only carries the fields that apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
	/// `ASRL<board>::INSTR`
	Asrl(Asrl),
	/// `GPIB<board>::<primary>::<secondary>::INSTR`
	GpibInstr(GpibInstr),
	/// `GPIB<board>::INTFC`
	GpibIntfc(GpibIntfc),
	/// `TCPIP<board>::<host>::<LAN device name>::INSTR`
	TcpipInstr(TcpipInstr),
	/// `TCPIP<board>::<host>::<port>::SOCKET`
	TcpipSocket(TcpipSocket),
	/// `USB<board>::<manufacturer ID>::<model code>::<serial number>::<interface>::INSTR`
	UsbInstr(Usb),
	/// `USB<board>::<manufacturer ID>::<model code>::<serial number>::<interface>::RAW`
	UsbRaw(Usb),
}

impl Address {
	/// The interface type of the resource.
	pub fn interface_type(&self) -> InterfaceType {
		match self {
			Address::Asrl(_) => InterfaceType::Asrl,
			Address::GpibInstr(_) | Address::GpibIntfc(_) => InterfaceType::Gpib,
			Address::TcpipInstr(_) | Address::TcpipSocket(_) => InterfaceType::Tcpip,
			Address::UsbInstr(_) | Address::UsbRaw(_) => InterfaceType::Usb,
		}
	}

	/// The resource class of the resource.
	pub fn resource_class(&self) -> ResourceClass {
		match self {
			Address::Asrl(_)
			| Address::GpibInstr(_)
			| Address::TcpipInstr(_)
			| Address::UsbInstr(_) => ResourceClass::Instr,
			Address::GpibIntfc(_) => ResourceClass::Intfc,
			Address::TcpipSocket(_) => ResourceClass::Socket,
			Address::UsbRaw(_) => ResourceClass::Raw,
		}
	}

	/// The board number.
	pub fn board(&self) -> &str {
		match self {
			Address::Asrl(a) => a.board(),
			Address::GpibInstr(a) => a.board(),
			Address::GpibIntfc(a) => a.board(),
			Address::TcpipInstr(a) => a.board(),
			Address::TcpipSocket(a) => a.board(),
			Address::UsbInstr(a) | Address::UsbRaw(a) => a.board(),
		}
	}
}

/// Writes the canonical resource name.
impl std::fmt::Display for Address {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.interface_type(), self.board())?;
		match self {
			Address::Asrl(_) | Address::GpibIntfc(_) => {}
			Address::GpibInstr(a) => {
				write!(f, "::{}::{}", a.primary_address, a.secondary_address)?;
			}
			Address::TcpipInstr(a) => {
				write!(f, "::{}::{}", a.host_address, a.lan_device_name)?;
			}
			Address::TcpipSocket(a) => write!(f, "::{}::{}", a.host_address, a.port)?,
			Address::UsbInstr(a) | Address::UsbRaw(a) => write!(
				f,
				"::{}::{}::{}::{}",
				a.manufacturer_id, a.model_code, a.serial_number, a.usb_interface_number
			)?,
		}
		write!(f, "::{}", self.resource_class())
	}
}
