//! Parsing VISA resource names.
//!
//! A resource name identifies an instrument and the transport used to reach it,
//! for example `GPIB0::12::INSTR` or `TCPIP::192.168.1.5::5025::SOCKET`. It is
//! made up of `::` separated segments: the interface type (with an optional
//! board number), the interface specific address fields, and an optional
//! resource class.
//!
//! The supported interface types and resource classes are:
//!
//! | Interface | Resource class | Syntax |
//! |-----------|----------------|--------|
//! | Serial    | `INSTR`  | `ASRL<board>[::INSTR]` |
//! | GPIB      | `INSTR`  | `GPIB[board]::<primary address>[::<secondary address>][::INSTR]` |
//! | GPIB      | `INTFC`  | `GPIB[board]::INTFC` |
//! | TCP/IP    | `INSTR`  | `TCPIP[board]::<host address>[::<LAN device name>][::INSTR]` |
//! | TCP/IP    | `SOCKET` | `TCPIP[board]::<host address>::<port>::SOCKET` |
//! | USB       | `INSTR`  | `USB[board]::<manufacturer ID>::<model code>::<serial number>[::<USB interface number>][::INSTR]` |
//! | USB       | `RAW`    | `USB[board]::<manufacturer ID>::<model code>::<serial number>[::<USB interface number>]::RAW` |
//!
//! Omitted fields take their default values: board `0` (except for serial
//! ports, which require one), secondary address [`65535`](NO_SECONDARY_ADDRESS),
//! LAN device name [`inst0`](DEFAULT_LAN_DEVICE_NAME) and USB interface number
//! `0`. The canonical resource name spells every field out.
//!
//! ## Examples
//!
//! ```
//! use visa_resource::{parse, Address, InterfaceType, ResourceClass};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resource = parse("TCPIP::192.168.134.102")?;
//! assert_eq!(resource.interface_type(), InterfaceType::Tcpip);
//! assert_eq!(resource.resource_class(), ResourceClass::Instr);
//! assert_eq!(resource.canonical_resource_name(), "TCPIP0::192.168.134.102::inst0::INSTR");
//!
//! match resource.address() {
//!     Address::TcpipInstr(instr) => {
//!         assert_eq!(instr.host_address(), "192.168.134.102");
//!         assert_eq!(instr.lan_device_name(), "inst0");
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

mod address;
mod kind;
mod options;

pub use address::{
	Address, Asrl, Field, GpibInstr, GpibIntfc, TcpipInstr, TcpipSocket, Usb, DEFAULT_BOARD,
	DEFAULT_LAN_DEVICE_NAME, DEFAULT_USB_INTERFACE_NUMBER, NO_SECONDARY_ADDRESS,
};
pub use kind::{InterfaceType, InvalidKeyword, ResourceClass};
pub use options::ParseOptions;

use crate::error::ResourceParseError;

/// The separator between segments of a resource name.
pub const SEPARATOR: &str = "::";

/// A successfully parsed resource name.
///
/// Create one with [`parse`] (or [`str::parse`]) or, for non-default parsing
/// options, with [`ParseOptions::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedResourceName {
	/// The resource name as it was passed to the parser.
	pub(crate) resource_name: Box<str>,
	/// The resource name with all defaults filled in.
	pub(crate) canonical_resource_name: Box<str>,
	/// The parsed fields.
	pub(crate) address: Address,
}

impl ParsedResourceName {
	/// The resource name exactly as it was passed to the parser.
	pub fn resource_name(&self) -> &str {
		&self.resource_name
	}

	/// The fully explicit form of the resource name.
	///
	/// Parsing the canonical name produces the same fields and the same
	/// canonical name.
	pub fn canonical_resource_name(&self) -> &str {
		&self.canonical_resource_name
	}

	/// The interface type (e.g., GPIB).
	pub fn interface_type(&self) -> InterfaceType {
		self.address.interface_type()
	}

	/// The resource class (e.g., `INSTR`).
	pub fn resource_class(&self) -> ResourceClass {
		self.address.resource_class()
	}

	/// The board number.
	pub fn board(&self) -> &str {
		self.address.board()
	}

	/// The interface specific fields.
	pub fn address(&self) -> &Address {
		&self.address
	}

	/// Consume the parsed resource name and return its fields.
	pub fn into_address(self) -> Address {
		self.address
	}
}

impl AsRef<Address> for ParsedResourceName {
	fn as_ref(&self) -> &Address {
		&self.address
	}
}

impl From<ParsedResourceName> for Address {
	fn from(other: ParsedResourceName) -> Self {
		other.address
	}
}

/// Writes the canonical resource name.
impl std::fmt::Display for ParsedResourceName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.canonical_resource_name)
	}
}

impl std::str::FromStr for ParsedResourceName {
	type Err = ResourceParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}

/// Parse a resource name with the default [`ParseOptions`].
///
/// ## Example
///
/// ```
/// # use visa_resource::parse;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let resource = parse("GPIB::1::INSTR")?;
/// assert_eq!(resource.board(), "0");
/// assert_eq!(resource.canonical_resource_name(), "GPIB0::1::65535::INSTR");
/// # Ok(())
/// # }
/// ```
pub fn parse(resource_name: &str) -> Result<ParsedResourceName, ResourceParseError> {
	ParseOptions::default().parse(resource_name)
}

/// Parse a resource name with the default [`ParseOptions`] and return its
/// canonical form.
///
/// ## Example
///
/// ```
/// # use visa_resource::to_canonical_name;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// assert_eq!(to_canonical_name("ASRL1")?, "ASRL1::INSTR");
/// # Ok(())
/// # }
/// ```
pub fn to_canonical_name(resource_name: &str) -> Result<String, ResourceParseError> {
	parse(resource_name).map(|resource| resource.canonical_resource_name.into_string())
}
