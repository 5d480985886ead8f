//! Error types.
//!
//! Parsing a resource name can only fail in one way, with a
//! [`ResourceParseError`]. The error keeps a copy of the offending resource
//! name and the [reason](ResourceParseErrorKind) it was rejected, so callers can
//! tell a string that is not a resource name at all from one that is
//! well-formed but addresses something this library does not support:
//!
//! ```
//! use visa_resource::{error::ResourceParseErrorKind, parse};
//!
//! let error = parse("ASRL::1.2.3.4::2::INSTR").unwrap_err();
//! assert_eq!(error.kind(), &ResourceParseErrorKind::NetworkSerialUnsupported);
//! assert!(error.is_unsupported());
//!
//! let error = parse("COM1").unwrap_err();
//! assert_eq!(error.kind(), &ResourceParseErrorKind::UnknownInterface);
//! assert!(!error.is_unsupported());
//! ```

use crate::resource::{Field, InterfaceType};

/// Implement Error and Display traits for the specified type.
///
/// After the type define the format string and any arguments it should
/// reference after `self =>` (to abide by macro hygiene rules).
macro_rules! impl_error_display {
	(
		$name:path,
		$self:ident =>
		$display:literal
		$(,
			$($arg:expr),+
		)?
	) => {
		impl std::error::Error for $name {}

		impl std::fmt::Display for $name {
			fn fmt(&$self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				write!(
					f,
					$display
					$(,
						$($arg),+
					)?
				)
			}
		}
	};
}
pub(crate) use impl_error_display;

/// The reason a resource name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ResourceParseErrorKind {
	/// The leading token does not name any known interface type.
	UnknownInterface,
	/// The interface type is a known VISA interface (e.g., `PXI`) that is not supported.
	UnsupportedInterface(Box<str>),
	/// The characters following the interface type are not a board number.
	InvalidBoard,
	/// There are too many or too few `::` separated segments for the interface type.
	SegmentCount {
		/// The syntax expected for the interface type and resource class.
		syntax: &'static str,
	},
	/// A required field is empty.
	MissingField(Field),
	/// A numeric field contains something other than decimal digits.
	NotANumber(Field),
	/// A numeric field is outside of its allowed range.
	///
	/// Only reported when [range checking](crate::ParseOptions::check_ranges) is enabled.
	OutOfRange(Field),
	/// The resource class is not supported for the interface type (e.g., `TCPIP::INTFC`).
	UnsupportedResourceClass {
		/// The interface type.
		interface: InterfaceType,
		/// The resource class keyword, as written.
		class: Box<str>,
	},
	/// The resource name addresses a serial port over the network (e.g.,
	/// `ASRL::1.2.3.4::2::INSTR`), which is recognized but not supported.
	NetworkSerialUnsupported,
}

impl std::fmt::Display for ResourceParseErrorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ResourceParseErrorKind as K;

		match self {
			K::UnknownInterface => write!(f, "unknown interface type"),
			K::UnsupportedInterface(name) => {
				write!(f, "the {name} interface type is not supported")
			}
			K::InvalidBoard => write!(f, "the board number must be decimal digits"),
			K::SegmentCount { syntax } => {
				write!(f, "wrong number of segments, the syntax is {syntax}")
			}
			K::MissingField(field) => write!(f, "missing {field}"),
			K::NotANumber(field) => write!(f, "the {field} must be decimal digits"),
			K::OutOfRange(field) => write!(f, "the {field} is out of range"),
			K::UnsupportedResourceClass { interface, class } => write!(
				f,
				"the {class} resource class is not supported for {interface} resources"
			),
			K::NetworkSerialUnsupported => {
				write!(f, "network-addressed serial (ASRL) resources are not supported")
			}
		}
	}
}

/// A resource name could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceParseError {
	/// The resource name, as passed to the parser.
	resource_name: Box<str>,
	/// Why it was rejected.
	kind: ResourceParseErrorKind,
}

impl_error_display! {
	ResourceParseError,
	self => "invalid resource name {:?}: {}", self.resource_name, self.kind
}

impl ResourceParseError {
	/// Create a instance of the error
	pub(crate) fn new(resource_name: &str, kind: ResourceParseErrorKind) -> Self {
		ResourceParseError {
			resource_name: Box::from(resource_name),
			kind,
		}
	}

	/// Get the resource name that failed to parse.
	pub fn resource_name(&self) -> &str {
		&self.resource_name
	}

	/// Get the reason the resource name was rejected.
	pub fn kind(&self) -> &ResourceParseErrorKind {
		&self.kind
	}

	/// Whether the resource name has a recognized shape that this library does
	/// not implement, as opposed to being malformed.
	pub fn is_unsupported(&self) -> bool {
		matches!(
			self.kind,
			ResourceParseErrorKind::UnsupportedInterface(_)
				| ResourceParseErrorKind::UnsupportedResourceClass { .. }
				| ResourceParseErrorKind::NetworkSerialUnsupported
		)
	}
}

impl From<ResourceParseError> for ResourceParseErrorKind {
	fn from(other: ResourceParseError) -> Self {
		other.kind
	}
}
