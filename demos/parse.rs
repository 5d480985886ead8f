//! Parse VISA resource names given on the command line and print their canonical form.

use simple_logger::SimpleLogger;
use visa_resource::{Address, ParseOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Enable logging
    SimpleLogger::new().init()?;

    // Parse each resource name passed on the command line, or a few samples.
    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = ["ASRL1", "GPIB::1::INSTR", "TCPIP::192.168.134.102", "ASRL::1.2.3.4::2::INSTR"]
            .map(String::from)
            .to_vec();
    }

    let mut options = ParseOptions::new();
    options.check_ranges(true);
    for name in &names {
        match options.parse(name) {
            Ok(resource) => {
                println!("{name} => {resource}");
                if let Address::TcpipSocket(socket) = resource.address() {
                    println!("    connect to {}:{}", socket.host_address(), socket.port());
                }
            }
            Err(e) => println!("{name} => error: {}", e.kind()),
        }
    }
    Ok(())
}
