//! Types defining the different options when parsing a resource name.

use super::{
	address::{
		Asrl, GpibInstr, GpibIntfc, TcpipInstr, TcpipSocket, Usb, DEFAULT_BOARD,
		DEFAULT_LAN_DEVICE_NAME, DEFAULT_USB_INTERFACE_NUMBER, NO_SECONDARY_ADDRESS,
	},
	Address, Field, InterfaceType, ParsedResourceName, ResourceClass, SEPARATOR,
};
use crate::error::{ResourceParseError, ResourceParseErrorKind as Kind};
use std::num::IntErrorKind;

const ASRL_INSTR_SYNTAX: &str = "ASRL<board>[::INSTR]";
const GPIB_INSTR_SYNTAX: &str = "GPIB[board]::primary address[::secondary address][::INSTR]";
const GPIB_INTFC_SYNTAX: &str = "GPIB[board]::INTFC";
const TCPIP_INSTR_SYNTAX: &str = "TCPIP[board]::host address[::LAN device name][::INSTR]";
const TCPIP_SOCKET_SYNTAX: &str = "TCPIP[board]::host address::port::SOCKET";
const USB_INSTR_SYNTAX: &str =
	"USB[board]::manufacturer ID::model code::serial number[::USB interface number][::INSTR]";
const USB_RAW_SYNTAX: &str =
	"USB[board]::manufacturer ID::model code::serial number[::USB interface number]::RAW";

/// Options for configuring how resource names are parsed.
///
/// The free function [`parse`](crate::parse) uses the default options.
///
/// ## Example
///
/// ```rust
/// # use visa_resource::ParseOptions;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut options = ParseOptions::new();
/// options.check_ranges(true);
///
/// let resource = options.parse("GPIB0::12::INSTR")?;
/// assert_eq!(resource.canonical_resource_name(), "GPIB0::12::65535::INSTR");
/// let reparsed = options.parse(resource.canonical_resource_name())?;
/// assert_eq!(reparsed.address(), resource.address());
///
/// assert!(options.parse("GPIB0::31::INSTR").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Whether numeric fields must be decimal digits.
	check_numbers: bool,
	/// Whether numeric fields must be within their allowed range.
	check_ranges: bool,
}

impl ParseOptions {
	/// Create a blank set of options ready for configuration.
	///
	/// Numeric fields must be decimal digits but their ranges are not checked.
	///
	/// Equivalent to [`default`](ParseOptions::default).
	pub fn new() -> Self {
		ParseOptions {
			check_numbers: true,
			check_ranges: false,
		}
	}

	/// Set whether numeric fields (the board, GPIB addresses, TCP port and USB
	/// interface number) must be made of decimal digits.
	///
	/// When disabled, any non-empty text is accepted and passed through.
	///
	/// The default is `true`.
	pub fn check_numbers(&mut self, check: bool) -> &mut Self {
		self.check_numbers = check;
		self
	}

	/// Set whether numeric fields must be within their allowed range: GPIB
	/// addresses in `0..=30`, TCP ports in `0..=65535` and USB interface numbers
	/// in `0..=254`. A secondary address of
	/// [`NO_SECONDARY_ADDRESS`](crate::resource::NO_SECONDARY_ADDRESS) is always
	/// accepted.
	///
	/// Range checking implies the fields are numbers, regardless of
	/// [`check_numbers`](ParseOptions::check_numbers).
	///
	/// The default is `false`.
	pub fn check_ranges(&mut self, check: bool) -> &mut Self {
		self.check_ranges = check;
		self
	}

	/// Parse `resource_name` with these options.
	pub fn parse(&self, resource_name: &str) -> Result<ParsedResourceName, ResourceParseError> {
		match self.parse_address(resource_name.trim()) {
			Ok(address) => {
				let canonical = address.to_string();
				log::debug!("parsed {resource_name:?} as {canonical}");
				Ok(ParsedResourceName {
					resource_name: Box::from(resource_name),
					canonical_resource_name: canonical.into_boxed_str(),
					address,
				})
			}
			Err(kind) => {
				log::debug!("failed to parse {resource_name:?}: {kind}");
				Err(ResourceParseError::new(resource_name, kind))
			}
		}
	}

	/// Classify the resource name and dispatch it to the grammar for its
	/// interface type and resource class.
	fn parse_address(&self, resource_name: &str) -> Result<Address, Kind> {
		let mut parts: Vec<&str> = resource_name.split(SEPARATOR).collect();
		let prefix = parts.remove(0);

		let split = prefix
			.find(|c: char| !c.is_ascii_alphabetic())
			.unwrap_or(prefix.len());
		let (interface, board) = prefix.split_at(split);
		let interface: InterfaceType = match interface.parse() {
			Ok(interface) => interface,
			Err(_) => {
				return Err(match InterfaceType::unsupported(interface) {
					Some(name) => Kind::UnsupportedInterface(Box::from(name)),
					None => Kind::UnknownInterface,
				})
			}
		};
		if self.check_numbers && !is_digits(board) {
			return Err(Kind::InvalidBoard);
		}

		let class = match parts.last().copied() {
			Some(last) => match last.parse::<ResourceClass>() {
				Ok(class) => {
					parts.pop();
					class
				}
				Err(_) => {
					if let Some(name) = ResourceClass::unsupported(last) {
						return Err(Kind::UnsupportedResourceClass {
							interface,
							class: Box::from(name),
						});
					}
					ResourceClass::Instr
				}
			},
			None => ResourceClass::Instr,
		};

		let grammar = Grammar {
			options: self,
			board,
			parts: &parts,
		};
		match (interface, class) {
			(InterfaceType::Asrl, ResourceClass::Instr) => grammar.asrl_instr(),
			(InterfaceType::Gpib, ResourceClass::Instr) => grammar.gpib_instr(),
			(InterfaceType::Gpib, ResourceClass::Intfc) => grammar.gpib_intfc(),
			(InterfaceType::Tcpip, ResourceClass::Instr) => grammar.tcpip_instr(),
			(InterfaceType::Tcpip, ResourceClass::Socket) => grammar.tcpip_socket(),
			(InterfaceType::Usb, ResourceClass::Instr) => {
				grammar.usb(USB_INSTR_SYNTAX).map(Address::UsbInstr)
			}
			(InterfaceType::Usb, ResourceClass::Raw) => {
				grammar.usb(USB_RAW_SYNTAX).map(Address::UsbRaw)
			}
			(interface, class) => Err(Kind::UnsupportedResourceClass {
				interface,
				class: Box::from(class.keyword()),
			}),
		}
	}

	/// Validate the contents of a numeric field.
	fn number(&self, field: Field, value: &str) -> Result<Box<str>, Kind> {
		if value.is_empty() {
			return Err(Kind::MissingField(field));
		}
		if self.check_numbers && !is_digits(value) {
			return Err(Kind::NotANumber(field));
		}
		// The sentinel written into canonical names must parse back.
		let is_sentinel = field == Field::SecondaryAddress && value == NO_SECONDARY_ADDRESS;
		if self.check_ranges && !is_sentinel {
			if let Some(max) = field.max_value() {
				let number: u32 = value.parse().map_err(|e: std::num::ParseIntError| {
					match e.kind() {
						IntErrorKind::PosOverflow => Kind::OutOfRange(field),
						_ => Kind::NotANumber(field),
					}
				})?;
				if number > max {
					return Err(Kind::OutOfRange(field));
				}
			}
		}
		Ok(Box::from(value))
	}
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// Whether `s` is made up of ASCII decimal digits only (an empty string is).
fn is_digits(s: &str) -> bool {
	s.bytes().all(|b| b.is_ascii_digit())
}

/// The segments of a resource name, after the interface type and resource
/// class have been identified.
struct Grammar<'a> {
	options: &'a ParseOptions,
	/// The characters following the interface type in the first segment.
	board: &'a str,
	/// The segments between the first one and the resource class.
	parts: &'a [&'a str],
}

impl Grammar<'_> {
	/// The board, or the default board if there is none.
	fn board_or_default(&self) -> Box<str> {
		if self.board.is_empty() {
			Box::from(DEFAULT_BOARD)
		} else {
			Box::from(self.board)
		}
	}

	/// Validate the contents of a non-numeric field.
	fn text(field: Field, value: &str) -> Result<Box<str>, Kind> {
		if value.is_empty() {
			Err(Kind::MissingField(field))
		} else {
			Ok(Box::from(value))
		}
	}

	fn asrl_instr(&self) -> Result<Address, Kind> {
		match self.parts {
			[] if self.board.is_empty() => Err(Kind::MissingField(Field::Board)),
			[] => Ok(Address::Asrl(Asrl {
				board: Box::from(self.board),
			})),
			// ASRL[board]::host address::port[::INSTR]
			[_, _] => Err(Kind::NetworkSerialUnsupported),
			_ => Err(Kind::SegmentCount {
				syntax: ASRL_INSTR_SYNTAX,
			}),
		}
	}

	fn gpib_instr(&self) -> Result<Address, Kind> {
		let (primary, secondary) = match self.parts {
			[primary] => (*primary, None),
			[primary, secondary] => (*primary, Some(*secondary)),
			_ => {
				return Err(Kind::SegmentCount {
					syntax: GPIB_INSTR_SYNTAX,
				})
			}
		};
		Ok(Address::GpibInstr(GpibInstr {
			board: self.board_or_default(),
			primary_address: self.options.number(Field::PrimaryAddress, primary)?,
			secondary_address: match secondary {
				Some(secondary) => self.options.number(Field::SecondaryAddress, secondary)?,
				None => Box::from(NO_SECONDARY_ADDRESS),
			},
		}))
	}

	fn gpib_intfc(&self) -> Result<Address, Kind> {
		if !self.parts.is_empty() {
			return Err(Kind::SegmentCount {
				syntax: GPIB_INTFC_SYNTAX,
			});
		}
		Ok(Address::GpibIntfc(GpibIntfc {
			board: self.board_or_default(),
		}))
	}

	fn tcpip_instr(&self) -> Result<Address, Kind> {
		let (host, device) = match self.parts {
			[host] => (*host, None),
			[host, device] => (*host, Some(*device)),
			_ => {
				return Err(Kind::SegmentCount {
					syntax: TCPIP_INSTR_SYNTAX,
				})
			}
		};
		Ok(Address::TcpipInstr(TcpipInstr {
			board: self.board_or_default(),
			host_address: Self::text(Field::HostAddress, host)?,
			lan_device_name: match device {
				Some(device) => Self::text(Field::LanDeviceName, device)?,
				None => Box::from(DEFAULT_LAN_DEVICE_NAME),
			},
		}))
	}

	fn tcpip_socket(&self) -> Result<Address, Kind> {
		let [host, port] = self.parts else {
			return Err(Kind::SegmentCount {
				syntax: TCPIP_SOCKET_SYNTAX,
			});
		};
		Ok(Address::TcpipSocket(TcpipSocket {
			board: self.board_or_default(),
			host_address: Self::text(Field::HostAddress, host)?,
			port: self.options.number(Field::Port, port)?,
		}))
	}

	/// The grammar shared by USB instruments and raw USB devices.
	fn usb(&self, syntax: &'static str) -> Result<Usb, Kind> {
		let (manufacturer_id, model_code, serial_number, interface) = match self.parts {
			[manufacturer_id, model_code, serial_number] => {
				(*manufacturer_id, *model_code, *serial_number, None)
			}
			[manufacturer_id, model_code, serial_number, interface] => (
				*manufacturer_id,
				*model_code,
				*serial_number,
				Some(*interface),
			),
			_ => return Err(Kind::SegmentCount { syntax }),
		};
		Ok(Usb {
			board: self.board_or_default(),
			manufacturer_id: Self::text(Field::ManufacturerId, manufacturer_id)?,
			model_code: Self::text(Field::ModelCode, model_code)?,
			serial_number: Self::text(Field::SerialNumber, serial_number)?,
			usb_interface_number: match interface {
				Some(interface) => self.options.number(Field::UsbInterfaceNumber, interface)?,
				None => Box::from(DEFAULT_USB_INTERFACE_NUMBER),
			},
		})
	}
}
