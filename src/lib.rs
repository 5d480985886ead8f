//! A small library for parsing VISA resource names, the strings used to address
//! test and measurement instruments.
//!
//! Serial ([`ASRL`](InterfaceType::Asrl)), [`GPIB`](InterfaceType::Gpib),
//! [`TCPIP`](InterfaceType::Tcpip) and [`USB`](InterfaceType::Usb) resources
//! are supported. Parsing fills in the defaults for omitted fields and produces
//! a canonical form of the resource name. See the [`resource`] module for the
//! grammar.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resource = visa_resource::parse("USB::0x1234::125::A22-5::3::RAW")?;
//! assert_eq!(resource.board(), "0");
//! assert_eq!(resource.canonical_resource_name(), "USB0::0x1234::125::A22-5::3::RAW");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(missing_debug_implementations)]

pub mod error;
pub mod resource;

pub use error::ResourceParseError;
pub use resource::{
	parse, to_canonical_name, Address, InterfaceType, ParseOptions, ParsedResourceName,
	ResourceClass,
};
