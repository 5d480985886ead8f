//! The keywords identifying interface types and resource classes.

use crate::error::impl_error_display;

/// Define a keyword enum from the upper-case keywords as they appear in a
/// resource name.
///
/// Each keyword becomes a camel-case variant (e.g., `TCPIP` becomes `Tcpip`).
/// `Display` writes the keyword and `FromStr` matches it case-insensitively.
///
/// The `unsupported` list names keywords of the same kind that VISA defines
/// but that have no grammar here. They are recognized only so they can be
/// reported as unsupported rather than unknown.
macro_rules! define_keywords {
	(
		$(#[$attr:meta])*
		pub enum $name:ident {
			$(
				$(#[$variant_attr:meta])*
				$keyword:ident
			),+
			$(,)?
		}
		unsupported [$($unsupported:ident),+ $(,)?]
	) => {
		paste::paste! {
			$(#[$attr])*
			#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
			pub enum $name {
				$(
					$(#[$variant_attr])*
					[< $keyword:camel >],
				)+
			}

			impl $name {
				/// Every variant, in declaration order.
				pub const ALL: &'static [$name] = &[$($name::[< $keyword:camel >]),+];

				/// The keyword as it is written in a canonical resource name.
				pub const fn keyword(self) -> &'static str {
					match self {
						$(
							$name::[< $keyword:camel >] => stringify!($keyword),
						)+
					}
				}

				/// Keywords VISA defines for this kind that cannot be parsed.
				pub(crate) const UNSUPPORTED: &'static [&'static str] =
					&[$(stringify!($unsupported)),+];

				/// The unsupported keyword matching `s`, ignoring case.
				pub(crate) fn unsupported(s: &str) -> Option<&'static str> {
					$name::UNSUPPORTED
						.iter()
						.copied()
						.find(|keyword| keyword.eq_ignore_ascii_case(s))
				}
			}

			impl std::fmt::Display for $name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.keyword())
				}
			}

			impl std::str::FromStr for $name {
				type Err = InvalidKeyword;

				fn from_str(s: &str) -> Result<Self, Self::Err> {
					$name::ALL
						.iter()
						.copied()
						.find(|value| value.keyword().eq_ignore_ascii_case(s))
						.ok_or(InvalidKeyword)
				}
			}
		}
	};
}

define_keywords! {
	/// The transport family of a resource.
	pub enum InterfaceType {
		/// A serial port.
		ASRL,
		/// A GPIB (IEEE-488) bus.
		GPIB,
		/// A TCP/IP network connection.
		TCPIP,
		/// A USB device.
		USB,
	}
	unsupported [PXI, VXI]
}

define_keywords! {
	/// The addressing mode within an interface type.
	pub enum ResourceClass {
		/// An instrument session.
		INSTR,
		/// A session with the bus interface itself, rather than a device on it.
		INTFC,
		/// A raw TCP socket.
		SOCKET,
		/// A raw USB endpoint.
		RAW,
	}
	unsupported [BACKPLANE, MEMACC, SERVANT]
}

/// Error indicating a string is not a recognized keyword.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InvalidKeyword;

impl_error_display! {
	InvalidKeyword,
	self => "unrecognized keyword"
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn keywords_are_upper_case() {
		assert_eq!(InterfaceType::Tcpip.keyword(), "TCPIP");
		assert_eq!(InterfaceType::Asrl.to_string(), "ASRL");
		assert_eq!(ResourceClass::Socket.keyword(), "SOCKET");
		assert_eq!(ResourceClass::Intfc.to_string(), "INTFC");
	}

	#[test]
	fn from_str_ignores_case() {
		assert_eq!("usb".parse(), Ok(InterfaceType::Usb));
		assert_eq!("Gpib".parse(), Ok(InterfaceType::Gpib));
		assert_eq!("raw".parse(), Ok(ResourceClass::Raw));
		assert_eq!("PXI".parse::<InterfaceType>(), Err(InvalidKeyword));
		assert_eq!("MEMACC".parse::<ResourceClass>(), Err(InvalidKeyword));
		assert_eq!("".parse::<ResourceClass>(), Err(InvalidKeyword));
	}

	#[test]
	fn unsupported_keywords_ignore_case() {
		assert_eq!(InterfaceType::unsupported("pxi"), Some("PXI"));
		assert_eq!(InterfaceType::unsupported("VXI"), Some("VXI"));
		assert_eq!(InterfaceType::unsupported("GPIB"), None);
		assert_eq!(ResourceClass::unsupported("Servant"), Some("SERVANT"));
		assert_eq!(ResourceClass::unsupported("INSTR"), None);
		assert_eq!(ResourceClass::unsupported(""), None);
	}

	#[test]
	fn unsupported_keywords_are_not_variants() {
		for keyword in InterfaceType::UNSUPPORTED {
			assert_eq!(keyword.parse::<InterfaceType>(), Err(InvalidKeyword));
		}
		for keyword in ResourceClass::UNSUPPORTED {
			assert_eq!(keyword.parse::<ResourceClass>(), Err(InvalidKeyword));
		}
	}

	#[test]
	fn every_variant_round_trips() {
		for value in InterfaceType::ALL {
			assert_eq!(value.to_string().parse(), Ok(*value));
		}
		for value in ResourceClass::ALL {
			assert_eq!(value.to_string().parse(), Ok(*value));
		}
	}
}
